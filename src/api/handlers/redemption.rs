//! Redemption handler: record a redemption and report its streak effect.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{RedeemRequest, RedeemResponse, StreakUpdateDto};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /redemptions` — Record a coupon redemption.
///
/// The redemption is persisted first; the streak orchestrator then runs
/// over the updated history. Streak accounting is an enhancement, not a
/// correctness-critical side effect: if it fails, the redemption still
/// succeeds and `streak` comes back `null`.
///
/// # Errors
///
/// Returns [`GatewayError::DataAccess`] if the redemption itself cannot
/// be written.
#[utoipa::path(
    post,
    path = "/api/v1/redemptions",
    tag = "Redemptions",
    summary = "Redeem a coupon",
    description = "Records a redemption and returns the resulting streak update (increment, break, milestone, first-ever) along with any celebration or consolation message.",
    request_body = RedeemRequest,
    responses(
        (status = 201, description = "Redemption recorded", body = RedeemResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 503, description = "Store unavailable", body = ErrorResponse),
    )
)]
pub async fn redeem(
    State(state): State<AppState>,
    Json(req): Json<RedeemRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let record = state
        .history
        .record_redemption(req.coupon_id, req.note.as_deref())
        .await?;

    // A streak failure must not fail the already-recorded redemption.
    let streak = match state.streak_service.process_redemption().await {
        Ok(result) => Some(StreakUpdateDto::from(result)),
        Err(e) => {
            tracing::warn!(error = %e, redemption_id = %record.id, "streak computation failed after redemption");
            None
        }
    };

    let response = RedeemResponse {
        redemption_id: record.id,
        coupon_id: record.coupon_id,
        redeemed_at: record.redeemed_at,
        streak,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Redemption routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/redemptions", post(redeem))
}
