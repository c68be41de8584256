//! # jobtrack-service
//!
//! Business rules for tracked jobs. The rules themselves are pure
//! functions ([`job::validation`], [`job::assignment`], [`job::guard`]);
//! [`JobService`] composes them with the persistence gateway.
//!
//! Services follow constructor injection: the gateway and the random
//! source are provided at construction time.

pub mod job;

pub use job::{JobService, StateAssigner};
