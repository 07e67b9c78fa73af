//! Health check endpoint

use axum::{extract::State, Json};

use crate::snapshot::HealthStatus;
use crate::AppState;

/// GET /health
///
/// Always healthy while the process is serving. Not logged by the handler.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus::collect(&state.start))
}
