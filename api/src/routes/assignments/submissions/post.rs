use super::common::SubmissionGradeResponse;
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::store::StoredGrade;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use grader::types::SubmissionCell;
use serde::Deserialize;

/// Request body for submitting notebook cells.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub cells: Vec<SubmissionCell>,
}

fn lookup_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<Option<SubmissionGradeResponse>>::error(
            message,
        )),
    )
        .into_response()
}

/// POST /api/assignments/{assignment_id}/submissions
///
/// Stores a student submission and auto-grades it immediately against the
/// assignment's current test cases. The persisted record keeps the full
/// feedback list; the response carries the student view, with hidden entries
/// withheld.
///
/// # Returns
///
/// - `200 OK` with the graded submission (student view).
/// - `500 INTERNAL SERVER ERROR` if the assignment does not exist.
///
/// # Example Response
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "submission_id": 1,
///     "assignment_id": 1,
///     "total_score": 5.0,
///     "max_score": 10.0,
///     "percentage": 50.0,
///     "graded_at": "2025-09-01T12:00:00+00:00",
///     "feedback": [ ... ]
///   },
///   "message": "Submission graded successfully"
/// }
/// ```
pub async fn submit(
    State(state): State<AppState>,
    Path(assignment_id): Path<i64>,
    Json(req): Json<SubmitRequest>,
) -> Response {
    let store = state.store();
    let assignment = match store.assignment(assignment_id) {
        Some(a) => a,
        None => {
            tracing::error!(assignment_id, "assignment lookup failed");
            return lookup_error("Assignment not found");
        }
    };

    let submission = match store.create_submission(assignment_id, req.cells) {
        Some(s) => s,
        None => return lookup_error("Assignment not found"),
    };

    let result = grader::grade_rows(&submission.cells, &assignment.test_cases);
    tracing::info!(
        assignment_id,
        submission_id = submission.id,
        total_score = result.total_score,
        max_score = result.max_score,
        "submission auto-graded"
    );

    let grade = StoredGrade {
        result,
        graded_at: Utc::now().to_rfc3339(),
    };
    let submission = match store.set_grade(submission.id, grade.clone()) {
        Some(s) => s,
        None => return lookup_error("Submission not found"),
    };

    let view = SubmissionGradeResponse::assemble(&submission, &grade, false);
    (
        StatusCode::OK,
        Json(ApiResponse::success(view, "Submission graded successfully")),
    )
        .into_response()
}

/// POST /api/assignments/{assignment_id}/submissions/{submission_id}/grade
///
/// Teacher re-grade: recomputes the auto-grade from the stored cells and the
/// assignment's current test cases, overwrites the persisted result, and
/// responds with the full feedback list, hidden entries included.
///
/// # Returns
///
/// - `200 OK` with the re-graded submission (teacher view).
/// - `500 INTERNAL SERVER ERROR` if the assignment or submission does not
///   exist, or the submission belongs to a different assignment.
pub async fn regrade(
    State(state): State<AppState>,
    Path((assignment_id, submission_id)): Path<(i64, i64)>,
) -> Response {
    let store = state.store();
    let assignment = match store.assignment(assignment_id) {
        Some(a) => a,
        None => {
            tracing::error!(assignment_id, "assignment lookup failed");
            return lookup_error("Assignment not found");
        }
    };

    let submission = match store.submission(submission_id) {
        Some(s) if s.assignment_id == assignment_id => s,
        Some(_) => return lookup_error("Submission does not belong to this assignment"),
        None => {
            tracing::error!(submission_id, "submission lookup failed");
            return lookup_error("Submission not found");
        }
    };

    let result = grader::grade_rows(&submission.cells, &assignment.test_cases);
    tracing::info!(
        assignment_id,
        submission_id,
        total_score = result.total_score,
        "submission re-graded"
    );

    let grade = StoredGrade {
        result,
        graded_at: Utc::now().to_rfc3339(),
    };
    let submission = match store.set_grade(submission_id, grade.clone()) {
        Some(s) => s,
        None => return lookup_error("Submission not found"),
    };

    let view = SubmissionGradeResponse::assemble(&submission, &grade, true);
    (
        StatusCode::OK,
        Json(ApiResponse::success(
            view,
            "Submission re-graded successfully",
        )),
    )
        .into_response()
}
