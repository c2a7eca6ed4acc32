//! Streak service: redemption orchestration and status reporting.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::domain::milestone::{milestone_progress, next_milestone};
use crate::domain::streak::evaluate_redemption;
use crate::domain::{CalendarDay, RedemptionStreakResult, StreakSnapshot, unique_sorted_days};
use crate::error::GatewayError;
use crate::persistence::RedemptionHistory;

/// Source of the current instant.
///
/// Injected so the service can be driven with a fixed clock under test;
/// the pure domain functions never read a clock at all.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock [`Clock`] used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Read-only streak status for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StreakStatus {
    /// Current streak state.
    pub snapshot: StreakSnapshot,
    /// Whether an active streak has lapsed (last redemption more than one
    /// day before today).
    pub is_broken: bool,
    /// Next milestone rung, absent at or past the top of the ladder.
    pub next_milestone: Option<u32>,
    /// Progress toward the next milestone, 0–100.
    pub milestone_progress: f64,
}

/// Orchestrates streak computation over the redemption history.
///
/// Read-then-compute only: every call reloads the full history and reduces
/// it through the pure domain functions. Holds no mutable state, so
/// concurrent status queries are safe; the caller must serialize
/// record-redemption-then-process sequences (one redemption in flight at a
/// time).
#[derive(Debug, Clone)]
pub struct StreakService {
    history: Arc<dyn RedemptionHistory>,
    clock: Arc<dyn Clock>,
    timezone: Tz,
}

impl StreakService {
    /// Creates a new service over the given history source, clock, and
    /// day-bucketing timezone.
    #[must_use]
    pub fn new(history: Arc<dyn RedemptionHistory>, clock: Arc<dyn Clock>, timezone: Tz) -> Self {
        Self {
            history,
            clock,
            timezone,
        }
    }

    /// Computes the read-only streak status snapshot.
    ///
    /// Side-effect-free; safe to call arbitrarily often (page load,
    /// polling).
    ///
    /// # Errors
    ///
    /// Propagates [`GatewayError::DataAccess`] if the history cannot be
    /// loaded — an unreachable store is never reported as a zero streak.
    pub async fn status(&self) -> Result<StreakStatus, GatewayError> {
        let timestamps = self.history.load_redemption_timestamps().await?;
        let days = unique_sorted_days(&timestamps, self.timezone);
        let today = CalendarDay::today_in(self.timezone, self.clock.now());

        let snapshot = StreakSnapshot::from_days(&days, today);
        let is_broken = snapshot
            .last_redeemed
            .is_some_and(|last| today.distance_from(last) > 1);

        Ok(StreakStatus {
            snapshot,
            is_broken,
            next_milestone: next_milestone(snapshot.current_streak),
            milestone_progress: milestone_progress(snapshot.current_streak),
        })
    }

    /// Classifies the redemption that was just durably recorded.
    ///
    /// Invoked exactly once per completed redemption, after the write.
    /// Reloads the full history (including the new event) and reports
    /// whether this was a first-ever redemption, a same-day repeat, an
    /// increment, a streak revival after a break, and any milestone hit.
    ///
    /// # Errors
    ///
    /// Propagates [`GatewayError::DataAccess`] on history-load failure.
    pub async fn process_redemption(&self) -> Result<RedemptionStreakResult, GatewayError> {
        let timestamps = self.history.load_redemption_timestamps().await?;
        let days = unique_sorted_days(&timestamps, self.timezone);
        let today = CalendarDay::today_in(self.timezone, self.clock.now());

        let redemptions_today = timestamps
            .iter()
            .filter(|t| CalendarDay::from_instant(**t, self.timezone) == today)
            .count();

        let result = evaluate_redemption(&days, redemptions_today, today);

        tracing::info!(
            current_streak = result.snapshot.current_streak,
            longest_streak = result.snapshot.longest_streak,
            did_increment = result.did_increment,
            did_break = result.did_break,
            milestone = result.milestone,
            "redemption streak processed"
        );

        Ok(result)
    }
}
