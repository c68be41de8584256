//! Convenience result type alias for JobTrack.

use crate::error::AppError;

/// A specialized `Result` type for JobTrack operations.
pub type AppResult<T> = Result<T, AppError>;
