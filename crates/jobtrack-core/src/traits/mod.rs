//! Core traits defined in `jobtrack-core` and implemented by other crates.

pub mod repository;

pub use repository::Repository;
