//! Service layer: business logic orchestration.
//!
//! [`StreakService`] coordinates the redemption-streak orchestrator and the
//! read-only status reporter, reducing the stored history through the pure
//! domain functions with an injected clock and configured timezone.

pub mod streak_service;

pub use streak_service::{Clock, StreakService, StreakStatus, SystemClock};
