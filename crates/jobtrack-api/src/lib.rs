//! # jobtrack-api
//!
//! HTTP API layer for JobTrack built on Axum.
//!
//! Provides the job REST endpoints, a health probe, middleware (CORS,
//! request logging, tracing), body and path extractors that answer in
//! the common `{message, status}` shape, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
