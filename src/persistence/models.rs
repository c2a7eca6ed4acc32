//! Database models for redemption records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A redemption row from the `redemptions` table.
///
/// Owned by the persistence layer; the streak core only ever reads the
/// `redeemed_at` instants and never mutates records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedemptionRecord {
    /// Row ID.
    pub id: Uuid,
    /// Coupon that was redeemed.
    pub coupon_id: Uuid,
    /// Optional note attached at redemption time.
    pub note: Option<String>,
    /// Server-side redemption timestamp (instant, not a calendar day).
    pub redeemed_at: DateTime<Utc>,
}
