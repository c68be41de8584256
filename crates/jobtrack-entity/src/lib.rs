//! # jobtrack-entity
//!
//! Domain entity models for JobTrack. Every struct in this crate represents
//! a database table row, a request body, or a domain value object. Database
//! entities additionally derive `sqlx::FromRow`.

pub mod job;
