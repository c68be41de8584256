//! Submission validation.
//!
//! Rules are checked in a fixed order and the first violation wins:
//! type, then priority, then schedule time.

use chrono::{DateTime, Utc};
use thiserror::Error;

use jobtrack_core::error::AppError;
use jobtrack_entity::job::CreateJobRequest;

/// Lowest accepted priority.
pub const MIN_PRIORITY: i32 = 0;

/// The first rule a single submission violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JobValidationError {
    /// Type is missing or empty.
    #[error("Invalid job type")]
    InvalidType,
    /// Priority is below [`MIN_PRIORITY`].
    #[error("Invalid job priority")]
    InvalidPriority,
    /// Schedule time is strictly before the validation instant.
    #[error("Scheduled time cannot be in the past")]
    ScheduledInPast,
}

/// The first failing item of a batch submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Job {job_type} : {reason}")]
pub struct BatchValidationError {
    /// Position of the failing item in the submission.
    pub index: usize,
    /// The failing item's type label (empty when absent).
    pub job_type: String,
    /// Which rule it violated.
    pub reason: JobValidationError,
}

impl From<JobValidationError> for AppError {
    fn from(err: JobValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl From<BatchValidationError> for AppError {
    fn from(err: BatchValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

/// Check a single submission against the rules as of `now`.
pub fn validate_job(job: &CreateJobRequest, now: DateTime<Utc>) -> Result<(), JobValidationError> {
    if job.job_type.as_deref().is_none_or(str::is_empty) {
        return Err(JobValidationError::InvalidType);
    }
    if job.priority < MIN_PRIORITY {
        return Err(JobValidationError::InvalidPriority);
    }
    if job.scheduled_time.is_some_and(|at| at < now) {
        return Err(JobValidationError::ScheduledInPast);
    }
    Ok(())
}

/// Check each submission in order, stopping at the first failure.
pub fn validate_jobs(
    jobs: &[CreateJobRequest],
    now: DateTime<Utc>,
) -> Result<(), BatchValidationError> {
    for (index, job) in jobs.iter().enumerate() {
        validate_job(job, now).map_err(|reason| BatchValidationError {
            index,
            job_type: job.type_label().to_string(),
            reason,
        })?;
    }
    Ok(())
}
