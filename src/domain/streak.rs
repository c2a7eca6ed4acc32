//! Pure streak computation over deduplicated calendar days.
//!
//! Everything in this module is a pure function of its inputs: the sorted
//! unique day sequence and an explicit `today`. No clock, no storage, no
//! randomness — the service layer owns those and injects them.

use serde::Serialize;

use super::calendar_day::CalendarDay;
use super::milestone::MILESTONES;

/// Current and all-time-longest consecutive-day counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakCounts {
    /// Consecutive days ending today or yesterday; 0 when lapsed.
    pub current: u32,
    /// Longest consecutive run anywhere in the history.
    pub longest: u32,
}

/// Snapshot of streak state for display.
///
/// Invariant: `longest_streak >= current_streak`, and both are 0 with
/// `last_redeemed` absent iff the history is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakSnapshot {
    /// Consecutive days ending today or yesterday.
    pub current_streak: u32,
    /// Longest run ever recorded.
    pub longest_streak: u32,
    /// Latest calendar day with at least one redemption.
    pub last_redeemed: Option<CalendarDay>,
}

impl StreakSnapshot {
    /// Builds a snapshot from a sorted unique day sequence and `today`.
    #[must_use]
    pub fn from_days(sorted_unique_days: &[CalendarDay], today: CalendarDay) -> Self {
        let counts = compute_streak(sorted_unique_days, today);
        Self {
            current_streak: counts.current,
            longest_streak: counts.longest,
            last_redeemed: sorted_unique_days.last().copied(),
        }
    }
}

/// Effect of a single just-recorded redemption on the streak.
///
/// Computed fresh per redemption, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RedemptionStreakResult {
    /// Streak state after this redemption.
    pub snapshot: StreakSnapshot,
    /// Whether the streak count grew (false for a same-day repeat).
    pub did_increment: bool,
    /// Whether a previously active streak had lapsed before this redemption
    /// revived it.
    pub did_break: bool,
    /// The milestone rung hit exactly by this redemption, if any.
    pub milestone: Option<u32>,
    /// Whether this was the very first redemption ever.
    pub is_first_redemption: bool,
}

/// Computes current and longest streak from a strictly increasing day
/// sequence plus an explicit `today`.
///
/// The current streak is alive when the latest day is today or yesterday
/// (`0 <= today − last <= 1`). A latest day in the future relative to
/// `today` ("time travel") counts as lapsed, not as an error. The longest
/// streak is never affected by `today`.
#[must_use]
pub fn compute_streak(sorted_unique_days: &[CalendarDay], today: CalendarDay) -> StreakCounts {
    let Some(last) = sorted_unique_days.last().copied() else {
        return StreakCounts {
            current: 0,
            longest: 0,
        };
    };

    // Longest: forward scan tracking the running consecutive-run length.
    let mut longest = 1u32;
    let mut run = 1u32;
    for (prev, next) in sorted_unique_days
        .iter()
        .zip(sorted_unique_days.iter().skip(1))
    {
        if next.distance_from(*prev) == 1 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }

    // Current: alive only if the last day is today or yesterday.
    let gap = today.distance_from(last);
    if !(0..=1).contains(&gap) {
        return StreakCounts {
            current: 0,
            longest,
        };
    }

    // Walk backward from the end counting consecutive 1-day steps.
    let trailing_steps = sorted_unique_days
        .iter()
        .rev()
        .zip(sorted_unique_days.iter().rev().skip(1))
        .take_while(|(later, earlier)| later.distance_from(**earlier) == 1)
        .count();
    let current = u32::try_from(trailing_steps).map_or(u32::MAX, |n| n.saturating_add(1));

    StreakCounts {
        current,
        longest: longest.max(current),
    }
}

/// Classifies a just-recorded redemption.
///
/// `redemptions_today` is the number of redemption *timestamps* (not unique
/// days) falling on today's calendar day, including the one just recorded.
/// More than one means this is a same-day repeat and the streak count is
/// unchanged.
#[must_use]
pub fn evaluate_redemption(
    sorted_unique_days: &[CalendarDay],
    redemptions_today: usize,
    today: CalendarDay,
) -> RedemptionStreakResult {
    let snapshot = StreakSnapshot::from_days(sorted_unique_days, today);

    if redemptions_today > 1 {
        return RedemptionStreakResult {
            snapshot,
            did_increment: false,
            did_break: false,
            milestone: None,
            is_first_redemption: false,
        };
    }

    if sorted_unique_days.len() == 1 {
        return RedemptionStreakResult {
            snapshot,
            did_increment: true,
            did_break: false,
            milestone: None,
            is_first_redemption: true,
        };
    }

    // The streak had already lapsed before today's redemption revived it
    // when the previous unique day is more than one day before today.
    let did_break = sorted_unique_days
        .iter()
        .rev()
        .nth(1)
        .is_some_and(|prev| today.distance_from(*prev) > 1);

    let milestone = MILESTONES
        .iter()
        .copied()
        .find(|m| *m == snapshot.current_streak);

    RedemptionStreakResult {
        snapshot,
        did_increment: true,
        did_break,
        milestone,
        is_first_redemption: false,
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn day(s: &str) -> CalendarDay {
        s.parse().unwrap()
    }

    fn days(specs: &[&str]) -> Vec<CalendarDay> {
        specs.iter().map(|s| day(s)).collect()
    }

    #[test]
    fn empty_history_is_zero_zero() {
        let counts = compute_streak(&[], day("2026-02-23"));
        assert_eq!(counts.current, 0);
        assert_eq!(counts.longest, 0);
    }

    #[test]
    fn single_day_equal_to_today() {
        let counts = compute_streak(&days(&["2026-02-23"]), day("2026-02-23"));
        assert_eq!(counts.current, 1);
        assert_eq!(counts.longest, 1);
    }

    #[test]
    fn three_consecutive_days_ending_today() {
        let history = days(&["2026-02-21", "2026-02-22", "2026-02-23"]);
        let counts = compute_streak(&history, day("2026-02-23"));
        assert_eq!(counts.current, 3);
        assert_eq!(counts.longest, 3);
    }

    #[test]
    fn skipped_day_breaks_current_but_keeps_longest() {
        // Feb 22 was missed; the earlier 3-day run remains the longest.
        let history = days(&["2026-02-19", "2026-02-20", "2026-02-21", "2026-02-23"]);
        let counts = compute_streak(&history, day("2026-02-23"));
        assert_eq!(counts.current, 1);
        assert_eq!(counts.longest, 3);
    }

    #[test]
    fn yesterday_keeps_streak_alive() {
        let history = days(&["2026-02-21", "2026-02-22"]);
        let counts = compute_streak(&history, day("2026-02-23"));
        assert_eq!(counts.current, 2);
        assert_eq!(counts.longest, 2);
    }

    #[test]
    fn gap_of_two_or_more_days_resets_current() {
        let history = days(&["2026-02-19", "2026-02-20"]);
        let counts = compute_streak(&history, day("2026-02-23"));
        assert_eq!(counts.current, 0);
        assert_eq!(counts.longest, 2);
    }

    #[test]
    fn longest_run_may_predate_current_run() {
        let history = days(&[
            "2026-02-01",
            "2026-02-02",
            "2026-02-03",
            "2026-02-04",
            "2026-02-05", // 5-day run
            "2026-02-10",
            "2026-02-11", // 2-day run
            "2026-02-20",
            "2026-02-21",
            "2026-02-22",
            "2026-02-23", // 4-day run, current
        ]);
        let counts = compute_streak(&history, day("2026-02-23"));
        assert_eq!(counts.current, 4);
        assert_eq!(counts.longest, 5);
    }

    #[test]
    fn longest_widens_when_current_run_exceeds_it() {
        let history = days(&[
            "2026-02-01",
            "2026-02-02",
            "2026-02-03",
            "2026-02-18",
            "2026-02-19",
            "2026-02-20",
            "2026-02-21",
            "2026-02-22",
            "2026-02-23",
        ]);
        let counts = compute_streak(&history, day("2026-02-23"));
        assert_eq!(counts.current, 6);
        assert_eq!(counts.longest, 6);
    }

    #[test]
    fn streak_spans_month_boundary() {
        let history = days(&["2026-01-30", "2026-01-31", "2026-02-01"]);
        let counts = compute_streak(&history, day("2026-02-01"));
        assert_eq!(counts.current, 3);
    }

    #[test]
    fn streak_spans_year_boundary() {
        let history = days(&["2025-12-30", "2025-12-31", "2026-01-01"]);
        let counts = compute_streak(&history, day("2026-01-01"));
        assert_eq!(counts.current, 3);
    }

    #[test]
    fn today_before_history_zeroes_current_keeps_longest() {
        let history = days(&["2026-02-24", "2026-02-25"]);
        let counts = compute_streak(&history, day("2026-02-22"));
        assert_eq!(counts.current, 0);
        assert_eq!(counts.longest, 2);
    }

    #[test]
    fn single_old_day() {
        let counts = compute_streak(&days(&["2026-02-10"]), day("2026-02-23"));
        assert_eq!(counts.current, 0);
        assert_eq!(counts.longest, 1);
    }

    #[test]
    fn longest_is_never_less_than_current() {
        let history = days(&["2026-02-20", "2026-02-21", "2026-02-22", "2026-02-23"]);
        let counts = compute_streak(&history, day("2026-02-23"));
        assert!(counts.longest >= counts.current);
    }

    #[test]
    fn snapshot_of_empty_history() {
        let snapshot = StreakSnapshot::from_days(&[], day("2026-02-23"));
        assert_eq!(snapshot.current_streak, 0);
        assert_eq!(snapshot.longest_streak, 0);
        assert_eq!(snapshot.last_redeemed, None);
    }

    #[test]
    fn snapshot_reports_last_redeemed_day() {
        let history = days(&["2026-02-21", "2026-02-22"]);
        let snapshot = StreakSnapshot::from_days(&history, day("2026-02-23"));
        assert_eq!(snapshot.last_redeemed, Some(day("2026-02-22")));
    }

    #[test]
    fn first_redemption_ever() {
        let result = evaluate_redemption(&days(&["2026-02-23"]), 1, day("2026-02-23"));
        assert!(result.is_first_redemption);
        assert!(result.did_increment);
        assert!(!result.did_break);
        assert_eq!(result.milestone, None);
        assert_eq!(result.snapshot.current_streak, 1);
    }

    #[test]
    fn same_day_repeat_does_not_change_streak() {
        let result = evaluate_redemption(&days(&["2026-02-23"]), 2, day("2026-02-23"));
        assert!(!result.did_increment);
        assert!(!result.did_break);
        assert!(!result.is_first_redemption);
        assert_eq!(result.milestone, None);
        assert_eq!(result.snapshot.current_streak, 1);
    }

    #[test]
    fn second_redemption_on_consecutive_day() {
        let result = evaluate_redemption(
            &days(&["2026-02-22", "2026-02-23"]),
            1,
            day("2026-02-23"),
        );
        assert!(!result.is_first_redemption);
        assert!(result.did_increment);
        assert!(!result.did_break);
        assert_eq!(result.milestone, None); // 3 not yet reached
        assert_eq!(result.snapshot.current_streak, 2);
    }

    #[test]
    fn revival_after_gap_reports_break() {
        let result = evaluate_redemption(
            &days(&["2026-02-19", "2026-02-20", "2026-02-23"]),
            1,
            day("2026-02-23"),
        );
        assert!(result.did_break);
        assert!(result.did_increment);
        assert_eq!(result.snapshot.current_streak, 1);
        assert_eq!(result.snapshot.longest_streak, 2);
    }

    #[test]
    fn milestone_reported_at_exactly_seven_days() {
        let history = days(&[
            "2026-02-17",
            "2026-02-18",
            "2026-02-19",
            "2026-02-20",
            "2026-02-21",
            "2026-02-22",
            "2026-02-23",
        ]);
        let result = evaluate_redemption(&history, 1, day("2026-02-23"));
        assert_eq!(result.milestone, Some(7));
        assert_eq!(result.snapshot.current_streak, 7);
    }

    #[test]
    fn milestone_reported_at_three_days() {
        let history = days(&["2026-02-21", "2026-02-22", "2026-02-23"]);
        let result = evaluate_redemption(&history, 1, day("2026-02-23"));
        assert_eq!(result.milestone, Some(3));
    }

    #[test]
    fn no_milestone_between_rungs() {
        let history = days(&[
            "2026-02-19",
            "2026-02-20",
            "2026-02-21",
            "2026-02-22",
            "2026-02-23",
        ]);
        let result = evaluate_redemption(&history, 1, day("2026-02-23"));
        assert_eq!(result.milestone, None); // 5 is not a rung
    }
}
