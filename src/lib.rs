//! # streak-gateway
//!
//! REST API gateway for the love-coupon redemption streak engine.
//!
//! The algorithmic core is the streak engine: pure calendar-day arithmetic,
//! a consecutive-day streak calculator, and a fixed milestone ladder. The
//! gateway wraps it with a read-only status endpoint and a redemption
//! endpoint that records an event and reports its streak effect.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── StreakService (service/)
//!     │       orchestrator + status reporter, injected clock & timezone
//!     │
//!     ├── Streak engine (domain/)
//!     │       calendar days, streak calculator, milestone policy — pure
//!     │
//!     └── PostgreSQL redemption history (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
