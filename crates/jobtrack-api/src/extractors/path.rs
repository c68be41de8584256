//! Job id path extractor.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use jobtrack_core::error::AppError;
use jobtrack_core::types::JobId;

use crate::error::ApiError;

/// Extracts the `{id}` path segment as a [`JobId`].
#[derive(Debug, Clone, Copy)]
pub struct JobIdPath(pub JobId);

impl<S> FromRequestParts<S> for JobIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        parse_job_id(&raw).map(Self).map_err(ApiError::from)
    }
}

/// Parse a job id string, returning a validation error on failure.
pub fn parse_job_id(raw: &str) -> Result<JobId, AppError> {
    raw.parse::<JobId>()
        .map_err(|_| AppError::validation(format!("Invalid job id: {raw}")))
}
