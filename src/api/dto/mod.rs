//! Data Transfer Objects for REST request/response serialization.
//!
//! All wire field names are camelCase to match the documented streak API.

pub mod streak_dto;

pub use streak_dto::*;
