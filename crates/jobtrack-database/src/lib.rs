//! # jobtrack-database
//!
//! PostgreSQL connection management and the job persistence gateways:
//! a sqlx-backed repository and an in-process one for tests and
//! single-node deployments.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{DynJobRepository, MemoryJobRepository, PgJobRepository};
