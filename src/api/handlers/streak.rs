//! Streak status handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::StreakStatusResponse;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /streak` — Current streak status snapshot.
///
/// Read-only and side-effect-free; the UI polls this on page load.
///
/// # Errors
///
/// Returns [`GatewayError::DataAccess`] if the redemption history cannot
/// be loaded.
#[utoipa::path(
    get,
    path = "/api/v1/streak",
    tag = "Streak",
    summary = "Get streak status",
    description = "Returns the current and longest redemption streaks, the last redeemed day, whether the streak has broken, and progress toward the next milestone.",
    responses(
        (status = 200, description = "Streak status", body = StreakStatusResponse),
        (status = 503, description = "Redemption history unavailable", body = ErrorResponse),
    )
)]
pub async fn get_streak(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let status = state.streak_service.status().await?;
    Ok(Json(StreakStatusResponse::from(status)))
}

/// Streak routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/streak", get(get_streak))
}
