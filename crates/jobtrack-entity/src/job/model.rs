//! Job entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use jobtrack_core::types::JobId;

use super::state::JobState;
use super::timestamp;

/// A persisted job record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Gateway-assigned identifier.
    pub id: JobId,
    /// Free-form job type label (e.g., `"ingest"`).
    #[serde(rename = "type")]
    pub job_type: String,
    /// Current lifecycle state.
    pub state: JobState,
    /// Priority; never negative for accepted jobs.
    pub priority: i32,
    /// Earliest time the job should run (None = unscheduled).
    pub scheduled_time: Option<DateTime<Utc>>,
}

impl Job {
    /// Materialize a record from its gateway-assigned id and creation data.
    pub fn from_new(id: JobId, data: &NewJob) -> Self {
        Self {
            id,
            job_type: data.job_type.clone(),
            state: data.state,
            priority: data.priority,
            scheduled_time: data.scheduled_time,
        }
    }

    /// Check if the job is currently running.
    pub fn is_running(&self) -> bool {
        self.state == JobState::Running
    }

    /// A running job must not be deleted out from under its executor.
    pub fn can_delete(&self) -> bool {
        !self.is_running()
    }

    /// Only failed jobs may be retried.
    pub fn can_retry(&self) -> bool {
        self.state == JobState::Failed
    }
}

/// A fully decided job awaiting an identity from the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJob {
    /// Job type label.
    pub job_type: String,
    /// Initial lifecycle state.
    pub state: JobState,
    /// Priority.
    pub priority: i32,
    /// Scheduled time.
    pub scheduled_time: Option<DateTime<Utc>>,
}

/// Client-submitted job fields, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    /// Job type label. Missing and empty are both rejected by validation.
    #[serde(rename = "type", default)]
    pub job_type: Option<String>,
    /// Priority; defaults to 0 when omitted.
    #[serde(default)]
    pub priority: i32,
    /// Optional schedule time.
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub scheduled_time: Option<DateTime<Utc>>,
}

impl CreateJobRequest {
    /// Create a request with the given fields.
    pub fn new(
        job_type: impl Into<String>,
        priority: i32,
        scheduled_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            job_type: Some(job_type.into()),
            priority,
            scheduled_time,
        }
    }

    /// The type label as shown in messages; absent renders as empty.
    pub fn type_label(&self) -> &str {
        self.job_type.as_deref().unwrap_or_default()
    }
}
