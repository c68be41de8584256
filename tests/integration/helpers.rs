//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use jobtrack_api::{AppState, build_app};
use jobtrack_core::config::AppConfig;
use jobtrack_core::traits::Repository;
use jobtrack_database::{DynJobRepository, MemoryJobRepository};
use jobtrack_entity::job::{Job, JobState, NewJob};
use jobtrack_service::{JobService, StateAssigner};

/// Seed for the initial-state draw in every test app.
pub const SEED: u64 = 20_240_601;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The backing store, for arranging and inspecting state directly
    pub repo: Arc<MemoryJobRepository>,
}

/// Build the full application over an arbitrary job gateway.
pub fn app_with_gateway(repo: DynJobRepository) -> Router {
    let service = JobService::new(repo, StateAssigner::seeded(SEED));
    build_app(AppState::new(AppConfig::default(), service))
}

/// Captured response.
pub struct TestResponse {
    /// Status code.
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when empty).
    pub body: Value,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store.
    pub fn new() -> Self {
        let repo = Arc::new(MemoryJobRepository::new());
        let router = app_with_gateway(repo.clone());
        Self { router, repo }
    }

    /// Store a job in a specific state, bypassing random assignment.
    pub async fn seed_job(&self, job_type: &str, state: JobState) -> Job {
        self.repo
            .create(&NewJob {
                job_type: job_type.to_string(),
                state,
                priority: 1,
                scheduled_time: None,
            })
            .await
            .expect("Failed to seed job")
    }

    /// Send a request with an optional JSON body.
    pub async fn request(&self, method: Method, path: &str, body: Option<Value>) -> TestResponse {
        let body = match body {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        };
        self.send(method, path, body).await
    }

    /// Send a raw body labelled as JSON.
    pub async fn request_raw(&self, method: Method, path: &str, raw: &str) -> TestResponse {
        self.send(method, path, Body::from(raw.to_string())).await
    }

    async fn send(&self, method: Method, path: &str, body: Body) -> TestResponse {
        send(&self.router, method, path, body).await
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request(Method::DELETE, path, None).await
    }

    pub async fn patch(&self, path: &str) -> TestResponse {
        self.request(Method::PATCH, path, None).await
    }
}

/// Send one request through `router` and capture the JSON response.
pub async fn send(router: &Router, method: Method, path: &str, body: Body) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .expect("Failed to build request");

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body is not JSON")
    };

    TestResponse { status, body }
}

/// Assert a `{message, status}` body.
pub fn assert_message(response: &TestResponse, status: StatusCode, message: &str) {
    assert_eq!(response.status, status, "body: {}", response.body);
    assert_eq!(response.body["message"], message);
    assert_eq!(response.body["status"], status.as_u16());
}
