//! HTTP route entry point for `/api/...`.
//!
//! Route groups include:
//! - `/health` → Health check endpoint.
//! - `/assignments` → Assignment creation/retrieval, submission intake,
//!   auto-grading and re-grading.

use crate::routes::{assignments::assignments_routes, health::health_routes};
use crate::state::AppState;
use axum::Router;

pub mod assignments;
pub mod health;

/// Builds the complete application router for all HTTP endpoints.
///
/// # Route Structure:
/// - `/health` → Health check endpoint.
/// - `/assignments` → Assignment and submission routes.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/assignments", assignments_routes())
        .with_state(app_state)
}
