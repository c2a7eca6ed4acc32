//! Streak and redemption DTOs.
//!
//! Wire field names are camelCase; calendar days serialize as canonical
//! `YYYY-MM-DD` strings and `lastRedeemedDate` is an explicit `null` when
//! there is no history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::CalendarDay;
use crate::domain::milestone::{milestone_message, random_break_message};
use crate::domain::streak::RedemptionStreakResult;
use crate::service::StreakStatus;

/// Response body for `GET /streak`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StreakStatusResponse {
    /// Consecutive days ending today or yesterday.
    pub current_streak: u32,
    /// Longest run ever recorded.
    pub longest_streak: u32,
    /// Latest redemption day, or `null` with no history.
    #[schema(value_type = Option<String>, example = "2026-02-23")]
    pub last_redeemed_date: Option<CalendarDay>,
    /// Whether an active streak has lapsed.
    pub is_broken: bool,
    /// Next milestone rung, or `null` at/past the top of the ladder.
    pub next_milestone: Option<u32>,
    /// Progress toward the next milestone, 0–100.
    pub milestone_progress: f64,
}

impl From<StreakStatus> for StreakStatusResponse {
    fn from(status: StreakStatus) -> Self {
        Self {
            current_streak: status.snapshot.current_streak,
            longest_streak: status.snapshot.longest_streak,
            last_redeemed_date: status.snapshot.last_redeemed,
            is_broken: status.is_broken,
            next_milestone: status.next_milestone,
            milestone_progress: status.milestone_progress,
        }
    }
}

/// Request body for `POST /redemptions`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RedeemRequest {
    /// Coupon being redeemed.
    pub coupon_id: Uuid,
    /// Optional note to attach.
    #[serde(default)]
    pub note: Option<String>,
}

/// Streak effect of a single redemption, with the message strings the UI
/// shows for celebrations and consolations.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StreakUpdateDto {
    /// Consecutive days ending today or yesterday.
    pub current_streak: u32,
    /// Longest run ever recorded.
    pub longest_streak: u32,
    /// Latest redemption day.
    #[schema(value_type = Option<String>, example = "2026-02-23")]
    pub last_redeemed_date: Option<CalendarDay>,
    /// Whether the streak count grew.
    pub did_increment: bool,
    /// Whether a lapsed streak was just revived.
    pub did_break: bool,
    /// Milestone rung hit exactly by this redemption.
    pub milestone: Option<u32>,
    /// Whether this was the first redemption ever.
    pub is_first_redemption: bool,
    /// Celebration message for the milestone, when one was hit.
    pub milestone_message: Option<String>,
    /// Consolation message, when the streak had broken.
    pub break_message: Option<String>,
}

impl From<RedemptionStreakResult> for StreakUpdateDto {
    fn from(result: RedemptionStreakResult) -> Self {
        Self {
            current_streak: result.snapshot.current_streak,
            longest_streak: result.snapshot.longest_streak,
            last_redeemed_date: result.snapshot.last_redeemed,
            did_increment: result.did_increment,
            did_break: result.did_break,
            milestone: result.milestone,
            is_first_redemption: result.is_first_redemption,
            milestone_message: result
                .milestone
                .and_then(milestone_message)
                .map(str::to_string),
            break_message: result
                .did_break
                .then(|| random_break_message().to_string()),
        }
    }
}

/// Response body for `POST /redemptions` (201 Created).
///
/// `streak` is `null` when the streak computation failed after the
/// redemption was recorded — the redemption itself still succeeds.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RedeemResponse {
    /// New redemption record ID.
    pub redemption_id: Uuid,
    /// Coupon that was redeemed.
    pub coupon_id: Uuid,
    /// Server-side redemption timestamp.
    pub redeemed_at: DateTime<Utc>,
    /// Streak effect, when the computation succeeded.
    pub streak: Option<StreakUpdateDto>,
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use crate::domain::StreakSnapshot;

    use super::*;

    #[test]
    fn status_response_serializes_camel_case_with_null_day() {
        let response = StreakStatusResponse {
            current_streak: 0,
            longest_streak: 0,
            last_redeemed_date: None,
            is_broken: false,
            next_milestone: Some(3),
            milestone_progress: 0.0,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["currentStreak"], 0);
        assert_eq!(json["lastRedeemedDate"], serde_json::Value::Null);
        assert_eq!(json["nextMilestone"], 3);
        assert_eq!(json["isBroken"], false);
    }

    #[test]
    fn update_dto_carries_milestone_message() {
        let result = RedemptionStreakResult {
            snapshot: StreakSnapshot {
                current_streak: 7,
                longest_streak: 7,
                last_redeemed: Some("2026-02-23".parse().unwrap()),
            },
            did_increment: true,
            did_break: false,
            milestone: Some(7),
            is_first_redemption: false,
        };
        let dto = StreakUpdateDto::from(result);
        assert_eq!(dto.milestone, Some(7));
        assert!(dto.milestone_message.is_some());
        assert_eq!(dto.break_message, None);
    }

    #[test]
    fn update_dto_carries_break_message_on_revival() {
        let result = RedemptionStreakResult {
            snapshot: StreakSnapshot {
                current_streak: 1,
                longest_streak: 3,
                last_redeemed: Some("2026-02-23".parse().unwrap()),
            },
            did_increment: true,
            did_break: true,
            milestone: None,
            is_first_redemption: false,
        };
        let dto = StreakUpdateDto::from(result);
        assert!(dto.break_message.is_some());
        assert_eq!(dto.milestone_message, None);
    }
}
