//! Local-timezone calendar-day bucketing and day arithmetic.
//!
//! [`CalendarDay`] is a newtype wrapper around [`chrono::NaiveDate`] whose
//! canonical wire form is `YYYY-MM-DD`. Two instants belong to the same
//! calendar day iff they share year, month, and day-of-month in the
//! *configured* timezone — never UTC and never the host's ambient zone —
//! so a redemption at 23:55 local time counts toward the day the user
//! experienced it on.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A local-timezone calendar day, canonical form `YYYY-MM-DD`.
///
/// Ordering is chronological ([`NaiveDate`]'s `Ord`), which coincides with
/// lexicographic order of the canonical string because the format is
/// zero-padded and big-endian. Serialized transparently as the canonical
/// string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    /// Buckets an instant into its calendar day in the given timezone.
    #[must_use]
    pub fn from_instant(instant: DateTime<Utc>, tz: Tz) -> Self {
        Self(instant.with_timezone(&tz).date_naive())
    }

    /// Returns "today" for an explicit `now` instant in the given timezone.
    ///
    /// The clock is always passed in explicitly so streak computations stay
    /// deterministic under test.
    #[must_use]
    pub fn today_in(tz: Tz, now: DateTime<Utc>) -> Self {
        Self::from_instant(now, tz)
    }

    /// Constructs a day from year/month/day fields. `None` if the fields do
    /// not name a real date.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Returns `self − other` in whole calendar days (signed).
    ///
    /// Exact across month and year boundaries; a negative result means
    /// `other` is later than `self`. Calendar-date subtraction is integer
    /// day arithmetic, so there is no daylight-saving drift to absorb.
    #[must_use]
    pub fn distance_from(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }

    /// Returns the inner [`NaiveDate`].
    #[must_use]
    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDay {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Self)
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// `a − b` in whole calendar days. See [`CalendarDay::distance_from`].
#[must_use]
pub fn day_distance(a: CalendarDay, b: CalendarDay) -> i64 {
    a.distance_from(b)
}

/// Maps each instant to its calendar day in `tz`, deduplicates, and returns
/// the days sorted ascending.
///
/// Input ordering is not assumed; the history source may return timestamps
/// in any order.
#[must_use]
pub fn unique_sorted_days(instants: &[DateTime<Utc>], tz: Tz) -> Vec<CalendarDay> {
    instants
        .iter()
        .map(|instant| CalendarDay::from_instant(*instant, tz))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
