use super::common::SubmissionGradeResponse;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

/// Query parameters for fetching a persisted grade.
#[derive(Debug, Default, Deserialize)]
pub struct GradeViewParams {
    /// `teacher` for the full feedback list; anything else (or absent) yields
    /// the student view with hidden entries withheld.
    #[serde(default)]
    pub view: Option<String>,
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

/// GET /api/assignments/{assignment_id}/submissions/{submission_id}
///
/// Retrieves the persisted auto-grade for a submission.
///
/// # Arguments
///
/// Query parameters via [`GradeViewParams`]:
/// - `view`: (Optional) `teacher` returns all feedback entries; the default
///   student view filters out hidden ones. Totals are identical either way.
///
/// # Returns
///
/// - `200 OK` with the grade record.
/// - `500 INTERNAL SERVER ERROR` if the submission or assignment does not
///   exist, the submission belongs to a different assignment, or it has not
///   been graded.
pub async fn get_submission_grade(
    State(state): State<AppState>,
    Path((assignment_id, submission_id)): Path<(i64, i64)>,
    Query(params): Query<GradeViewParams>,
) -> Response {
    let store = state.store();
    if store.assignment(assignment_id).is_none() {
        tracing::error!(assignment_id, "assignment lookup failed");
        return lookup_error("Assignment not found");
    }

    let submission = match store.submission(submission_id) {
        Some(s) if s.assignment_id == assignment_id => s,
        Some(_) => return lookup_error("Submission does not belong to this assignment"),
        None => {
            tracing::error!(submission_id, "submission lookup failed");
            return lookup_error("Submission not found");
        }
    };

    let grade = match &submission.grade {
        Some(g) => g.clone(),
        None => return lookup_error("Submission has not been graded"),
    };

    let teacher_view = params.view.as_deref() == Some("teacher");
    let view = SubmissionGradeResponse::assemble(&submission, &grade, teacher_view);
    (
        StatusCode::OK,
        Json(ApiResponse::success(view, "Grade retrieved successfully")),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoredGrade;
    use axum::body::to_bytes;
    use grader::types::{FeedbackEntry, GradeResult, SubmissionCell};
    use serde_json::Value;

    fn entry(hidden: bool) -> FeedbackEntry {
        FeedbackEntry {
            cell_index: 0,
            test_type: "code_contains".to_string(),
            passed: true,
            points_earned: 5.0,
            points_possible: 5.0,
            message: "Code contains required pattern \"for\"".to_string(),
            is_hidden: hidden,
        }
    }

    fn seeded_state() -> (AppState, i64, i64) {
        let state = AppState::new();
        let assignment = state.store().create_assignment("A".to_string(), vec![]);
        let submission = state
            .store()
            .create_submission(assignment.id, vec![SubmissionCell::default()])
            .unwrap();
        state
            .store()
            .set_grade(
                submission.id,
                StoredGrade {
                    result: GradeResult {
                        total_score: 10.0,
                        max_score: 10.0,
                        percentage: 100.0,
                        feedback: vec![entry(false), entry(true)],
                    },
                    graded_at: "2025-09-01T12:00:00+00:00".to_string(),
                },
            )
            .unwrap();
        (state, assignment.id, submission.id)
    }

    async fn body_json(response: Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_default_view_is_student_filtered() {
        let (state, assignment_id, submission_id) = seeded_state();
        let response = get_submission_grade(
            State(state),
            Path((assignment_id, submission_id)),
            Query(GradeViewParams::default()),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let value = body_json(response).await;
        assert_eq!(value["data"]["feedback"].as_array().unwrap().len(), 1);
        assert_eq!(value["data"]["total_score"], 10.0);
    }

    #[tokio::test]
    async fn test_teacher_view_includes_hidden() {
        let (state, assignment_id, submission_id) = seeded_state();
        let response = get_submission_grade(
            State(state),
            Path((assignment_id, submission_id)),
            Query(GradeViewParams {
                view: Some("teacher".to_string()),
            }),
        )
        .await
        .into_response();

        let value = body_json(response).await;
        assert_eq!(value["data"]["feedback"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_submission_is_server_error() {
        let (state, assignment_id, _) = seeded_state();
        let response = get_submission_grade(
            State(state),
            Path((assignment_id, 99)),
            Query(GradeViewParams::default()),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let value = body_json(response).await;
        assert_eq!(value["message"], "Submission not found");
    }

    #[tokio::test]
    async fn test_ungraded_submission_is_server_error() {
        let state = AppState::new();
        let assignment = state.store().create_assignment("A".to_string(), vec![]);
        let submission = state
            .store()
            .create_submission(assignment.id, vec![])
            .unwrap();

        let response = get_submission_grade(
            State(state),
            Path((assignment.id, submission.id)),
            Query(GradeViewParams::default()),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let value = body_json(response).await;
        assert_eq!(value["message"], "Submission has not been graded");
    }
}
