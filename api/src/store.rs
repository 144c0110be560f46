//! In-memory persistence for assignments and graded submissions.
//!
//! The store stands in for the hosted database the production deployment
//! would use: it owns the test-case definitions per assignment and the full
//! (unfiltered) grade record per submission. Handlers read and write through
//! a shared, cloneable handle; concurrent re-grades of one submission
//! serialize on the write lock and the last write wins, which is safe because
//! grading is idempotent for identical inputs.

use grader::types::{GradeResult, SubmissionCell, TestCaseRow};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A teacher-authored assignment: a title plus an ordered test-case list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub title: String,
    /// Raw rows, in authoring order. Validation happens at grading time so a
    /// defective row soft-fails instead of blocking assignment creation.
    pub test_cases: Vec<TestCaseRow>,
}

/// A persisted auto-grade: the full result (hidden entries included) plus the
/// time it was computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredGrade {
    pub result: GradeResult,
    pub graded_at: String,
}

/// A student submission and, once graded, its latest auto-grade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub cells: Vec<SubmissionCell>,
    pub grade: Option<StoredGrade>,
}

#[derive(Default)]
struct StoreInner {
    assignments: HashMap<i64, Assignment>,
    submissions: HashMap<i64, Submission>,
    next_assignment_id: i64,
    next_submission_id: i64,
}

/// Shared, cloneable handle to the class data.
#[derive(Clone, Default)]
pub struct ClassStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl ClassStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an assignment and return the stored record with its new id.
    pub fn create_assignment(&self, title: String, test_cases: Vec<TestCaseRow>) -> Assignment {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.next_assignment_id += 1;
        let assignment = Assignment {
            id: inner.next_assignment_id,
            title,
            test_cases,
        };
        inner
            .assignments
            .insert(assignment.id, assignment.clone());
        assignment
    }

    /// Fetch an assignment by id.
    pub fn assignment(&self, id: i64) -> Option<Assignment> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner.assignments.get(&id).cloned()
    }

    /// Create an ungraded submission under an assignment.
    ///
    /// Returns `None` when the assignment does not exist.
    pub fn create_submission(
        &self,
        assignment_id: i64,
        cells: Vec<SubmissionCell>,
    ) -> Option<Submission> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        if !inner.assignments.contains_key(&assignment_id) {
            return None;
        }
        inner.next_submission_id += 1;
        let submission = Submission {
            id: inner.next_submission_id,
            assignment_id,
            cells,
            grade: None,
        };
        inner
            .submissions
            .insert(submission.id, submission.clone());
        Some(submission)
    }

    /// Fetch a submission by id.
    pub fn submission(&self, id: i64) -> Option<Submission> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner.submissions.get(&id).cloned()
    }

    /// Overwrite a submission's auto-grade (last write wins) and return the
    /// updated record. Returns `None` when the submission does not exist.
    pub fn set_grade(&self, submission_id: i64, grade: StoredGrade) -> Option<Submission> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let submission = inner.submissions.get_mut(&submission_id)?;
        submission.grade = Some(grade);
        Some(submission.clone())
    }
}
