//! PostgreSQL implementation of the redemption history store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::RedemptionHistory;
use super::models::RedemptionRecord;
use crate::error::GatewayError;

/// PostgreSQL-backed redemption store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresRedemptionStore {
    pool: PgPool,
}

impl PostgresRedemptionStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RedemptionHistory for PostgresRedemptionStore {
    async fn load_redemption_timestamps(&self) -> Result<Vec<DateTime<Utc>>, GatewayError> {
        let rows = sqlx::query_scalar::<_, DateTime<Utc>>(
            "SELECT redeemed_at FROM redemptions ORDER BY redeemed_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GatewayError::DataAccess(e.to_string()))?;

        Ok(rows)
    }

    async fn record_redemption(
        &self,
        coupon_id: Uuid,
        note: Option<&str>,
    ) -> Result<RedemptionRecord, GatewayError> {
        let row = sqlx::query_as::<_, (Uuid, Uuid, Option<String>, DateTime<Utc>)>(
            "INSERT INTO redemptions (id, coupon_id, note) VALUES ($1, $2, $3) \
             RETURNING id, coupon_id, note, redeemed_at",
        )
        .bind(Uuid::new_v4())
        .bind(coupon_id)
        .bind(note)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| GatewayError::DataAccess(e.to_string()))?;

        let (id, coupon_id, note, redeemed_at) = row;
        Ok(RedemptionRecord {
            id,
            coupon_id,
            note,
            redeemed_at,
        })
    }
}
