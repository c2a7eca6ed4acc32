//! Persistence layer: redemption history storage.
//!
//! [`RedemptionHistory`] is the single capability the streak engine consumes
//! from storage: the full list of redemption instants, plus the append used
//! by the redemption workflow. The concrete implementation uses
//! `sqlx::PgPool`; service tests substitute an in-memory double.

pub mod models;
pub mod postgres;

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::GatewayError;
use models::RedemptionRecord;

/// Source of redemption history.
///
/// Ordering of the returned timestamps is not guaranteed; the streak core
/// sorts and deduplicates itself. A load failure must surface as
/// [`GatewayError::DataAccess`] — never as an empty list.
#[async_trait]
pub trait RedemptionHistory: Send + Sync + fmt::Debug {
    /// Loads every redemption timestamp ever recorded.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::DataAccess`] if the store is unreachable.
    async fn load_redemption_timestamps(&self) -> Result<Vec<DateTime<Utc>>, GatewayError>;

    /// Appends a redemption record, stamped server-side.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::DataAccess`] if the write fails.
    async fn record_redemption(
        &self,
        coupon_id: Uuid,
        note: Option<&str>,
    ) -> Result<RedemptionRecord, GatewayError>;
}
