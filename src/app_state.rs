//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::persistence::RedemptionHistory;
use crate::service::StreakService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Streak orchestrator and status reporter.
    pub streak_service: Arc<StreakService>,
    /// Redemption history store, used by the redemption workflow to append
    /// new records before the streak service reads them back.
    pub history: Arc<dyn RedemptionHistory>,
}
