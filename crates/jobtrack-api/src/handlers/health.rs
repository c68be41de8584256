//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
///
/// Probes the job gateway with a count; a failing gateway yields `503`.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let uptime_seconds = state.started_at.elapsed().as_secs();

    let (status, database, jobs) = match state.job_service.count_jobs().await {
        Ok(count) => (StatusCode::OK, "up", Some(count)),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the job store");
            (StatusCode::SERVICE_UNAVAILABLE, "down", None)
        }
    };

    let body = HealthResponse {
        status: if status.is_success() { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds,
        database: database.to_string(),
        jobs,
    };

    (status, Json(body))
}
