//! Preconditions on state-mutating operations.

use jobtrack_core::error::AppError;
use jobtrack_core::result::AppResult;
use jobtrack_entity::job::Job;

/// Message returned when deleting a running job.
pub const RUNNING_DELETE_MESSAGE: &str = "Cannot delete a running job";

/// Message returned when retrying a job that has not failed.
pub const NOT_FAILED_MESSAGE: &str = "Job is not in failed state";

/// A running job cannot be deleted.
pub fn ensure_deletable(job: &Job) -> AppResult<()> {
    if job.can_delete() {
        Ok(())
    } else {
        Err(AppError::conflict(RUNNING_DELETE_MESSAGE))
    }
}

/// Only a failed job can be retried.
pub fn ensure_retryable(job: &Job) -> AppResult<()> {
    if job.can_retry() {
        Ok(())
    } else {
        Err(AppError::conflict(NOT_FAILED_MESSAGE))
    }
}
