use crate::response::ApiResponse;
use crate::state::AppState;
use crate::store::Assignment;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use grader::types::TestCaseRow;
use serde::Deserialize;

/// Request body for creating an assignment.
#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub title: String,
    /// Test cases in authoring order. Rows are stored as-is; per-row
    /// validation happens at grading time so a defective row soft-fails its
    /// own test case instead of blocking creation.
    #[serde(default)]
    pub test_cases: Vec<TestCaseRow>,
}

/// POST /api/assignments
///
/// Creates an assignment from a title and an ordered test-case list.
///
/// # Returns
///
/// - `200 OK` with the stored assignment (id assigned by the server).
/// - `400 BAD REQUEST` if any test case has negative points.
///
/// # Example Response
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "title": "Loops homework",
///     "test_cases": [ ... ]
///   },
///   "message": "Assignment created successfully"
/// }
/// ```
pub async fn create_assignment(
    State(state): State<AppState>,
    Json(req): Json<CreateAssignmentRequest>,
) -> Response {
    if req.test_cases.iter().any(|row| row.points < 0.0) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Option<Assignment>>::error(
                "Test case points must be non-negative",
            )),
        )
            .into_response();
    }

    let assignment = state.store().create_assignment(req.title, req.test_cases);
    tracing::info!(assignment_id = assignment.id, "assignment created");

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            assignment,
            "Assignment created successfully",
        )),
    )
        .into_response()
}
