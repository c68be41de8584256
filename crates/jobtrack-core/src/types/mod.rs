//! Core type definitions used across the JobTrack workspace.

pub mod id;

pub use id::JobId;
