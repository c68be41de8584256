//! Job lifecycle state enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle position of a tracked job.
///
/// Variant order is significant: the random initial-state draw indexes
/// into [`JobState::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum JobState {
    /// Waiting for an executor.
    Queued,
    /// Being executed.
    Running,
    /// Finished successfully.
    Completed,
    /// Finished unsuccessfully; eligible for retry.
    Failed,
}

impl JobState {
    /// Every state, in ordinal order.
    pub const ALL: [JobState; 4] = [Self::Queued, Self::Running, Self::Completed, Self::Failed];

    /// Return the state as its persisted/wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queued => "QUEUED",
            Self::Running => "RUNNING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a stored or supplied state string is not one of the four states.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown job state '{0}'")]
pub struct ParseJobStateError(pub String);

impl FromStr for JobState {
    type Err = ParseJobStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "QUEUED" => Ok(Self::Queued),
            "RUNNING" => Ok(Self::Running),
            "COMPLETED" => Ok(Self::Completed),
            "FAILED" => Ok(Self::Failed),
            other => Err(ParseJobStateError(other.to_string())),
        }
    }
}
