//! Custom Axum extractors.
//!
//! Both wrap a stock extractor and turn its rejection into an
//! [`ApiError`](crate::error::ApiError) so clients always see the
//! `{message, status}` body.

pub mod json;
pub mod path;

pub use json::ApiJson;
pub use path::JobIdPath;
