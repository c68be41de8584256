//! Tracked job domain entities.

pub mod model;
pub mod state;
pub mod timestamp;

pub use model::{CreateJobRequest, Job, NewJob};
pub use state::{JobState, ParseJobStateError};
