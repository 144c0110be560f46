//! Assignment routes.
//!
//! - `POST /assignments` → Create an assignment with its test cases
//! - `GET  /assignments/{assignment_id}` → Fetch an assignment (teacher view)
//! - `/assignments/{assignment_id}/submissions/...` → Submission intake and grading

use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use get::get_assignment;
use post::create_assignment;
use submissions::submissions_routes;

pub mod get;
pub mod post;
pub mod submissions;

/// Builds the `/assignments` route group.
pub fn assignments_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_assignment))
        .route("/{assignment_id}", get(get_assignment))
        .nest("/{assignment_id}/submissions", submissions_routes())
}
