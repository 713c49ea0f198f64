use axum::extract::State;
use axum::{routing::get, Json, Router};
use newsletter_core::types::IssueNumber;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
    /// Issue rendered on the front page.
    pub current_issue: IssueNumber,
}

/// GET /health -- returns service and database health plus the configured
/// current issue.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = newsletter_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        current_issue: state.config.current_issue,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
