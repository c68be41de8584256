//! HTTP-level tests driving the full router against the in-memory job store.

mod health_test;
mod helpers;
mod jobs_test;
