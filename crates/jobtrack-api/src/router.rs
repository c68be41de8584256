//! Route definitions for the JobTrack HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to handlers via Axum's `State` extractor.

use axum::Router;
use axum::routing::{get, patch, post};

use crate::handlers;
use crate::state::AppState;

/// Build the routed application without middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().merge(job_routes()).merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Job endpoints: submission, lookup, delete, retry, running probe
fn job_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/jobs",
            post(handlers::job::create_job).get(handlers::job::list_jobs),
        )
        .route("/jobs/bulk", post(handlers::job::create_jobs))
        .route(
            "/jobs/{id}",
            get(handlers::job::get_job).delete(handlers::job::delete_job),
        )
        .route("/jobs/status/{id}", get(handlers::job::get_job_status))
        .route("/jobs/retry/{id}", patch(handlers::job::retry_job))
        .route("/jobs/running/{id}", get(handlers::job::job_running))
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
