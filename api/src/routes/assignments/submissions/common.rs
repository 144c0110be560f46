//! Shared response shapes for submission routes.

use crate::store::{StoredGrade, Submission};
use grader::feedback;
use grader::types::FeedbackEntry;
use serde::Serialize;

/// The grade record returned to clients.
///
/// The same shape serves both audiences; only the `feedback` list differs.
/// The teacher view carries every entry, the student view the non-hidden
/// subsequence. Totals always reflect all tests, hidden ones included.
#[derive(Debug, Serialize)]
pub struct SubmissionGradeResponse {
    pub submission_id: i64,
    pub assignment_id: i64,
    pub total_score: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub graded_at: String,
    pub feedback: Vec<FeedbackEntry>,
}

impl SubmissionGradeResponse {
    /// Assemble the response for a graded submission.
    ///
    /// # Arguments
    /// - `submission`: The stored submission record.
    /// - `grade`: Its persisted auto-grade.
    /// - `teacher_view`: If true, include hidden feedback entries.
    pub fn assemble(submission: &Submission, grade: &StoredGrade, teacher_view: bool) -> Self {
        let feedback = if teacher_view {
            grade.result.feedback.clone()
        } else {
            feedback::visible(&grade.result.feedback)
        };

        Self {
            submission_id: submission.id,
            assignment_id: submission.assignment_id,
            total_score: grade.result.total_score,
            max_score: grade.result.max_score,
            percentage: grade.result.percentage,
            graded_at: grade.graded_at.clone(),
            feedback,
        }
    }
}
