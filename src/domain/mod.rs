//! Domain layer: the pure streak engine.
//!
//! Calendar-day bucketing and arithmetic, the streak calculator, and the
//! milestone policy. Nothing in this module touches storage or the system
//! clock; "today" is always an explicit parameter.

pub mod calendar_day;
pub mod milestone;
pub mod streak;

pub use calendar_day::{CalendarDay, day_distance, unique_sorted_days};
pub use streak::{RedemptionStreakResult, StreakCounts, StreakSnapshot, compute_streak};
