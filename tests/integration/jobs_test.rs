//! Job endpoint tests.

use axum::http::{Method, StatusCode};
use chrono::{DateTime, Duration, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use jobtrack_core::traits::Repository;
use jobtrack_core::types::JobId;
use jobtrack_entity::job::JobState;
use jobtrack_service::job::assign_state;

use crate::helpers::{SEED, TestApp, assert_message};

fn state_of(body: &serde_json::Value) -> JobState {
    body["state"]
        .as_str()
        .and_then(|s| s.parse().ok())
        .expect("state field")
}

#[tokio::test]
async fn test_create_job_returns_created_record() {
    let app = TestApp::new();
    let mut expected = StdRng::seed_from_u64(SEED);

    let response = app
        .post("/api/jobs", json!({ "type": "email", "priority": 3 }))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["id"], 1);
    assert_eq!(response.body["type"], "email");
    assert_eq!(response.body["priority"], 3);
    assert!(response.body["scheduledTime"].is_null());
    assert_eq!(state_of(&response.body), assign_state(&mut expected, None));
}

#[tokio::test]
async fn test_create_job_defaults_priority_to_zero() {
    let app = TestApp::new();
    let response = app.post("/api/jobs", json!({ "type": "email" })).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["priority"], 0);
}

#[tokio::test]
async fn test_create_scheduled_job_is_queued() {
    let app = TestApp::new();
    let at = (Utc::now() + Duration::hours(2)).to_rfc3339();

    let response = app
        .post(
            "/api/jobs",
            json!({ "type": "report", "priority": 1, "scheduledTime": at }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(state_of(&response.body), JobState::Queued);
    let echoed: DateTime<Utc> = response.body["scheduledTime"]
        .as_str()
        .and_then(|s| s.parse().ok())
        .expect("scheduledTime");
    assert_eq!(echoed, at.parse::<DateTime<Utc>>().unwrap());
}

#[tokio::test]
async fn test_create_job_validation_errors() {
    let app = TestApp::new();
    let past = (Utc::now() - Duration::minutes(1)).to_rfc3339();

    let cases = [
        (json!({ "priority": 1 }), "Invalid job type"),
        (json!({ "type": "", "priority": 1 }), "Invalid job type"),
        (json!({ "type": "email", "priority": -1 }), "Invalid job priority"),
        (
            json!({ "type": "email", "priority": 1, "scheduledTime": past }),
            "Scheduled time cannot be in the past",
        ),
    ];

    for (body, message) in cases {
        let response = app.post("/api/jobs", body).await;
        assert_message(&response, StatusCode::BAD_REQUEST, message);
    }
    assert_eq!(app.repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_job_malformed_body_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .request_raw(Method::POST, "/api/jobs", "{\"type\": \"email\",")
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], 400);

    let response = app
        .post("/api/jobs", json!({ "type": "email", "priority": "high" }))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_bulk_create_preserves_order() {
    let app = TestApp::new();
    let later = (Utc::now() + Duration::days(1)).to_rfc3339();

    let response = app
        .post(
            "/api/jobs/bulk",
            json!([
                { "type": "first", "priority": 0 },
                { "type": "second", "priority": 5, "scheduledTime": later },
                { "type": "third", "priority": 9 }
            ]),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let jobs = response.body.as_array().expect("array body");
    let types: Vec<&str> = jobs.iter().filter_map(|j| j["type"].as_str()).collect();
    assert_eq!(types, ["first", "second", "third"]);
    assert_eq!(state_of(&jobs[1]), JobState::Queued);
    assert_eq!(app.repo.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_bulk_create_rejects_whole_batch() {
    let app = TestApp::new();

    let response = app
        .post(
            "/api/jobs/bulk",
            json!([
                { "type": "good", "priority": 1 },
                { "type": "bad", "priority": -4 },
                { "priority": 1 }
            ]),
        )
        .await;

    assert_message(
        &response,
        StatusCode::BAD_REQUEST,
        "Job bad : Invalid job priority",
    );
    assert_eq!(app.get("/api/jobs").await.body, json!([]));
}

#[tokio::test]
async fn test_bulk_create_missing_type_renders_empty_label() {
    let app = TestApp::new();
    let response = app.post("/api/jobs/bulk", json!([{ "priority": 1 }])).await;
    assert_message(&response, StatusCode::BAD_REQUEST, "Job  : Invalid job type");
}

#[tokio::test]
async fn test_bulk_create_empty_batch() {
    let app = TestApp::new();
    let response = app.post("/api/jobs/bulk", json!([])).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_list_and_get_jobs() {
    let app = TestApp::new();
    let a = app.seed_job("a", JobState::Completed).await;
    let b = app.seed_job("b", JobState::Running).await;

    let response = app.get("/api/jobs").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().map(Vec::len), Some(2));

    let response = app.get(&format!("/api/jobs/{}", b.id)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::to_value(&b).unwrap());
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn test_unknown_job_is_not_found() {
    let app = TestApp::new();
    for response in [
        app.get("/api/jobs/999").await,
        app.get("/api/jobs/status/999").await,
        app.delete("/api/jobs/999").await,
        app.patch("/api/jobs/retry/999").await,
    ] {
        assert_message(&response, StatusCode::NOT_FOUND, "Job not found");
    }
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = TestApp::new();
    let response = app.get("/api/jobs/abc").await;
    assert_message(&response, StatusCode::BAD_REQUEST, "Invalid job id: abc");
}

#[tokio::test]
async fn test_job_status_endpoint() {
    let app = TestApp::new();
    let job = app.seed_job("etl", JobState::Failed).await;
    let response = app.get(&format!("/api/jobs/status/{}", job.id)).await;
    assert_message(&response, StatusCode::OK, "FAILED");
}

#[tokio::test]
async fn test_delete_running_job_conflicts() {
    let app = TestApp::new();
    let job = app.seed_job("etl", JobState::Running).await;

    let response = app.delete(&format!("/api/jobs/{}", job.id)).await;
    assert_message(&response, StatusCode::CONFLICT, "Cannot delete a running job");
    assert!(app.repo.find_by_id(job.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_job_removes_it() {
    let app = TestApp::new();
    let job = app.seed_job("etl", JobState::Completed).await;
    let path = format!("/api/jobs/{}", job.id);

    let response = app.delete(&path).await;
    assert_message(&response, StatusCode::OK, "Job deleted successfully");

    let response = app.get(&path).await;
    assert_message(&response, StatusCode::NOT_FOUND, "Job not found");
}

#[tokio::test]
async fn test_retry_failed_job() {
    let app = TestApp::new();
    let job = app.seed_job("etl", JobState::Failed).await;

    let response = app.patch(&format!("/api/jobs/retry/{}", job.id)).await;
    assert_message(
        &response,
        StatusCode::OK,
        "Job retried successfully with new state : QUEUED",
    );

    let response = app.get(&format!("/api/jobs/{}", job.id)).await;
    assert_eq!(response.body["id"], job.id.get());
    assert_eq!(state_of(&response.body), JobState::Queued);
    assert_eq!(app.repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_retry_non_failed_job_conflicts() {
    let app = TestApp::new();
    for state in [JobState::Queued, JobState::Running, JobState::Completed] {
        let job = app.seed_job("etl", state).await;
        let response = app.patch(&format!("/api/jobs/retry/{}", job.id)).await;
        assert_message(&response, StatusCode::CONFLICT, "Job is not in failed state");
        assert_eq!(app.repo.find_by_id(job.id).await.unwrap().unwrap().state, state);
    }
}

#[tokio::test]
async fn test_running_probe() {
    let app = TestApp::new();
    let running = app.seed_job("etl", JobState::Running).await;
    let queued = app.seed_job("etl", JobState::Queued).await;

    let response = app.get(&format!("/api/jobs/running/{}", running.id)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "running": true }));

    let response = app.get(&format!("/api/jobs/running/{}", queued.id)).await;
    assert_eq!(response.body, json!({ "running": false }));

    let response = app
        .get(&format!("/api/jobs/running/{}", JobId::new(12_345)))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "running": false }));
}
