//! Job gateway implementations.

pub mod job;
pub mod memory;

use std::sync::Arc;

use jobtrack_core::traits::Repository;
use jobtrack_core::types::JobId;
use jobtrack_entity::job::{Job, NewJob};

pub use job::PgJobRepository;
pub use memory::MemoryJobRepository;

/// Shared, backend-agnostic handle to the job gateway.
pub type DynJobRepository = Arc<dyn Repository<Job, NewJob, JobId>>;
