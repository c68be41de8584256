//! Job handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use jobtrack_entity::job::{CreateJobRequest, Job, JobState};

use crate::dto::response::{MessageResponse, RunningResponse};
use crate::error::ApiError;
use crate::extractors::{ApiJson, JobIdPath};
use crate::state::AppState;

/// Acknowledgement for a successful delete.
pub const DELETED_MESSAGE: &str = "Job deleted successfully";

/// POST /api/jobs
pub async fn create_job(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateJobRequest>,
) -> Result<(StatusCode, Json<Job>), ApiError> {
    let job = state.job_service.create_job(&req).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// POST /api/jobs/bulk
pub async fn create_jobs(
    State(state): State<AppState>,
    ApiJson(reqs): ApiJson<Vec<CreateJobRequest>>,
) -> Result<(StatusCode, Json<Vec<Job>>), ApiError> {
    let jobs = state.job_service.create_jobs(&reqs).await?;
    Ok((StatusCode::CREATED, Json(jobs)))
}

/// GET /api/jobs
pub async fn list_jobs(State(state): State<AppState>) -> Result<Json<Vec<Job>>, ApiError> {
    let jobs = state.job_service.get_all_jobs().await?;
    Ok(Json(jobs))
}

/// GET /api/jobs/{id}
pub async fn get_job(
    State(state): State<AppState>,
    JobIdPath(id): JobIdPath,
) -> Result<Json<Job>, ApiError> {
    let job = state.job_service.get_job(id).await?;
    Ok(Json(job))
}

/// GET /api/jobs/status/{id}
pub async fn get_job_status(
    State(state): State<AppState>,
    JobIdPath(id): JobIdPath,
) -> Result<Json<MessageResponse>, ApiError> {
    let job_state = state.job_service.get_job_state(id).await?;
    Ok(Json(MessageResponse::ok(job_state.as_str())))
}

/// DELETE /api/jobs/{id}
pub async fn delete_job(
    State(state): State<AppState>,
    JobIdPath(id): JobIdPath,
) -> Result<Json<MessageResponse>, ApiError> {
    state.job_service.delete_job(id).await?;
    Ok(Json(MessageResponse::ok(DELETED_MESSAGE)))
}

/// PATCH /api/jobs/retry/{id}
pub async fn retry_job(
    State(state): State<AppState>,
    JobIdPath(id): JobIdPath,
) -> Result<Json<MessageResponse>, ApiError> {
    let job = state.job_service.retry_job(id).await?;
    debug_assert_eq!(job.state, RETRY_STATE, "retry must requeue the job");
    Ok(Json(MessageResponse::ok(retried_message())))
}

/// GET /api/jobs/running/{id}
pub async fn job_running(
    State(state): State<AppState>,
    JobIdPath(id): JobIdPath,
) -> Result<Json<RunningResponse>, ApiError> {
    let running = state.job_service.is_job_running(id).await?;
    Ok(Json(RunningResponse { running }))
}

/// The state every successful retry leaves a job in.
const RETRY_STATE: JobState = JobState::Queued;

fn retried_message() -> String {
    format!("Job retried successfully with new state : {RETRY_STATE}")
}
