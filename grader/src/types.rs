//! # Types Module
//!
//! Core data structures shared across the grader: submitted notebook cells,
//! typed test-case specifications, their raw wire form, and the grade result
//! returned to callers.

use serde::{Deserialize, Serialize};

/// A single submitted notebook cell.
///
/// Cells are positionally indexed; test cases reference them by index. A test
/// case that points past the end of the cell sequence is graded against an
/// empty cell rather than failing the grading run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionCell {
    /// Source code as authored by the student.
    #[serde(default)]
    pub content: String,
    /// Captured execution output for the cell. May be empty.
    #[serde(default)]
    pub output: String,
}

/// Closed set of test-case checks a teacher can author.
///
/// One variant per supported `test_type` tag. Keeping this a closed enum makes
/// dispatch an exhaustive `match`: adding a new test type is a compile-time
/// concern, and unknown tags are rejected during row parsing instead of being
/// silently skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "test_type", rename_all = "snake_case")]
pub enum TestSpec {
    /// Compare the cell's captured output against an expected string.
    OutputMatch {
        expected_output: String,
        /// If true, trimmed output must equal the trimmed expected string
        /// exactly (case-sensitive). Otherwise a case-insensitive substring
        /// match is used.
        exact_match: bool,
    },
    /// Require a substring in the cell's source (case-insensitive).
    CodeContains { contains: String },
    /// Require a function definition for the given name in the cell's source.
    FunctionExists { function_name: String },
    /// Require the variable name followed by the expected value somewhere in
    /// the cell's output or source. A deliberately permissive heuristic.
    VariableValue {
        variable_name: String,
        expected_value: String,
    },
}

impl TestSpec {
    /// The wire tag for this variant, as it appears in `test_type` fields and
    /// feedback entries.
    pub fn kind(&self) -> &'static str {
        match self {
            TestSpec::OutputMatch { .. } => "output_match",
            TestSpec::CodeContains { .. } => "code_contains",
            TestSpec::FunctionExists { .. } => "function_exists",
            TestSpec::VariableValue { .. } => "variable_value",
        }
    }
}

/// A fully-parsed, teacher-authored test case. Immutable during grading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// Opaque identifier assigned by the authoring side.
    pub id: String,
    /// Zero-based index of the targeted submission cell. Need not be unique
    /// across test cases; several tests may target the same cell.
    pub cell_index: usize,
    /// The check to run against the targeted cell.
    #[serde(flatten)]
    pub spec: TestSpec,
    /// Points this test contributes to the maximum achievable score.
    pub points: f64,
    /// If true, the detailed result is withheld from students but still
    /// counts toward the score.
    pub is_hidden: bool,
}

/// A test case as stored/transported before validation.
///
/// `test_type` is an open string and `test_config` an arbitrary JSON object at
/// this stage; [`crate::parser::parse_row`] turns a row into a typed
/// [`TestCase`] or a [`crate::error::GraderError`] describing the defect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCaseRow {
    pub id: String,
    pub cell_index: usize,
    pub test_type: String,
    #[serde(default)]
    pub test_config: serde_json::Value,
    pub points: f64,
    #[serde(default)]
    pub is_hidden: bool,
}

/// Result entry for one test case. Exactly one entry per input test case, in
/// input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// Index of the cell the test targeted.
    pub cell_index: usize,
    /// The wire tag of the test type (the raw tag for unknown types).
    pub test_type: String,
    /// Whether the test passed.
    pub passed: bool,
    /// `points` if the test passed, otherwise 0.
    pub points_earned: f64,
    /// The test's `points` value, regardless of outcome.
    pub points_possible: f64,
    /// Human-readable outcome description.
    pub message: String,
    /// Carried over from the test case; drives student-view filtering.
    pub is_hidden: bool,
}

/// The full outcome of grading one submission against one test-case list.
///
/// Computed fresh on every grading invocation; re-grading overwrites any
/// previously persisted result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeResult {
    /// Sum of `points` over passed test cases.
    pub total_score: f64,
    /// Sum of `points` over all test cases, pass or fail, hidden or not.
    pub max_score: f64,
    /// `total_score / max_score * 100`, or 0 when `max_score` is 0.
    pub percentage: f64,
    /// One entry per test case, in input order. Includes hidden entries; use
    /// [`crate::feedback::visible`] for the student-facing subsequence.
    pub feedback: Vec<FeedbackEntry>,
}
