//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use jobtrack_core::config::AppConfig;
use jobtrack_service::JobService;

/// Shared state injected into every handler via Axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Job lifecycle service.
    pub job_service: Arc<JobService>,
    /// When the process started serving.
    pub started_at: Instant,
}

impl AppState {
    /// Assemble state around an already-built job service.
    pub fn new(config: AppConfig, job_service: JobService) -> Self {
        Self {
            config: Arc::new(config),
            job_service: Arc::new(job_service),
            started_at: Instant::now(),
        }
    }
}
