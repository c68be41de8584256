//! Job lifecycle rules and the service that applies them.

pub mod assignment;
pub mod guard;
pub mod service;
pub mod validation;

pub use assignment::{StateAssigner, assign_state};
pub use guard::{ensure_deletable, ensure_retryable};
pub use service::JobService;
pub use validation::{BatchValidationError, JobValidationError, validate_job, validate_jobs};
