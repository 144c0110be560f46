use crate::response::ApiResponse;
use crate::state::AppState;
use crate::store::Assignment;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// GET /api/assignments/{assignment_id}
///
/// Retrieves an assignment with its full test-case list, hidden flags
/// included. This is the teacher-facing view; students never fetch test-case
/// definitions directly.
///
/// # Returns
///
/// - `200 OK` with the assignment.
/// - `500 INTERNAL SERVER ERROR` if the assignment does not exist.
pub async fn get_assignment(
    State(state): State<AppState>,
    Path(assignment_id): Path<i64>,
) -> Response {
    match state.store().assignment(assignment_id) {
        Some(assignment) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                assignment,
                "Assignment retrieved successfully",
            )),
        )
            .into_response(),
        None => {
            tracing::error!(assignment_id, "assignment lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Option<Assignment>>::error(
                    "Assignment not found",
                )),
            )
                .into_response()
        }
    }
}
