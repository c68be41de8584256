//! Response DTOs.
//!
//! Job payloads serialize [`jobtrack_entity::job::Job`] directly; the types
//! here cover the plain status replies.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// `{message, status}` body shared by errors and plain acknowledgements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
    /// Numeric HTTP status, repeated in the body.
    pub status: u16,
}

impl MessageResponse {
    /// Build a message body for the given status.
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status: status.as_u16(),
        }
    }

    /// A `200 OK` message body.
    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::OK)
    }
}

/// Result of the running-state probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningResponse {
    /// Whether the job exists and is `RUNNING`.
    pub running: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Seconds since the server started.
    pub uptime_seconds: u64,
    /// `"up"` when the job gateway answered, `"down"` otherwise.
    pub database: String,
    /// Number of stored jobs, when the gateway answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<u64>,
}
