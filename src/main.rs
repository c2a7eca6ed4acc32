//! streak-gateway server entry point.
//!
//! Starts the Axum HTTP server with the streak and redemption endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use streak_gateway::api;
use streak_gateway::app_state::AppState;
use streak_gateway::config::GatewayConfig;
use streak_gateway::persistence::RedemptionHistory;
use streak_gateway::persistence::postgres::PostgresRedemptionStore;
use streak_gateway::service::{StreakService, SystemClock};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(
        addr = %config.listen_addr,
        timezone = %config.streak_timezone,
        "starting streak-gateway"
    );

    // Connect to the redemption store
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .connect(&config.database_url)
        .await?;
    let history: Arc<dyn RedemptionHistory> = Arc::new(PostgresRedemptionStore::new(pool));

    // Build service layer
    let streak_service = Arc::new(StreakService::new(
        Arc::clone(&history),
        Arc::new(SystemClock),
        config.streak_timezone,
    ));

    // Build application state
    let app_state = AppState {
        streak_service,
        history,
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
