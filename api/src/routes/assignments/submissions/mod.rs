//! Submission routes under an assignment.
//!
//! - `POST /assignments/{assignment_id}/submissions` → Submit cells; graded
//!   immediately, responds with the student view (hidden feedback withheld).
//! - `GET  /assignments/{assignment_id}/submissions/{submission_id}` → Fetch
//!   the persisted grade; `?view=teacher` includes hidden feedback.
//! - `POST /assignments/{assignment_id}/submissions/{submission_id}/grade` →
//!   Teacher re-grade; recomputes and overwrites, responds with full feedback.

use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use get::get_submission_grade;
use post::{regrade, submit};

pub mod common;
pub mod get;
pub mod post;

/// Builds the submissions route group, nested under
/// `/assignments/{assignment_id}`.
pub fn submissions_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(submit))
        .route("/{submission_id}", get(get_submission_grade))
        .route("/{submission_id}/grade", post(regrade))
}
