//! Health endpoint tests, and server-error handling when the job store is down.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, StatusCode};

use jobtrack_core::error::AppError;
use jobtrack_core::result::AppResult;
use jobtrack_core::traits::Repository;
use jobtrack_core::types::JobId;
use jobtrack_entity::job::{Job, JobState, NewJob};

use crate::helpers::{TestApp, app_with_gateway, assert_message, send};

/// A job gateway whose backend is unreachable.
#[derive(Debug)]
struct UnreachableJobRepository;

fn unreachable() -> AppError {
    AppError::database("connection refused: postgres://jobtrack:secret@db:5432")
}

#[async_trait]
impl Repository<Job, NewJob, JobId> for UnreachableJobRepository {
    async fn find_by_id(&self, _id: JobId) -> AppResult<Option<Job>> {
        Err(unreachable())
    }

    async fn find_all(&self) -> AppResult<Vec<Job>> {
        Err(unreachable())
    }

    async fn create(&self, _data: &NewJob) -> AppResult<Job> {
        Err(unreachable())
    }

    async fn create_many(&self, _data: &[NewJob]) -> AppResult<Vec<Job>> {
        Err(unreachable())
    }

    async fn update(&self, _job: &Job) -> AppResult<Job> {
        Err(unreachable())
    }

    async fn delete(&self, _id: JobId) -> AppResult<bool> {
        Err(unreachable())
    }

    async fn count(&self) -> AppResult<u64> {
        Err(unreachable())
    }
}

#[tokio::test]
async fn test_health_reports_store_up() {
    let app = TestApp::new();
    app.seed_job("etl", JobState::Queued).await;

    let response = app.get("/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "up");
    assert_eq!(response.body["jobs"], 1);
    assert_eq!(response.body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_reports_store_down() {
    let router = app_with_gateway(Arc::new(UnreachableJobRepository));

    let response = send(&router, Method::GET, "/api/health", Body::empty()).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["status"], "degraded");
    assert_eq!(response.body["database"], "down");
    assert!(response.body.get("jobs").is_none());
}

#[tokio::test]
async fn test_store_failure_is_masked_internal_error() {
    let router = app_with_gateway(Arc::new(UnreachableJobRepository));

    for (method, path) in [
        (Method::GET, "/api/jobs/1"),
        (Method::GET, "/api/jobs"),
        (Method::PATCH, "/api/jobs/retry/1"),
    ] {
        let response = send(&router, method, path, Body::empty()).await;
        assert_message(
            &response,
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
        );
        assert!(!response.body.to_string().contains("secret"));
    }
}
