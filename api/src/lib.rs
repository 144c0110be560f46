//! HTTP boundary for the auto-grading service.
//!
//! Exposes assignment and submission routes over axum, wires grading requests
//! through the `grader` crate, and keeps graded submissions in the shared
//! application state. All responses use the standard [`response::ApiResponse`]
//! envelope.

pub mod config;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
