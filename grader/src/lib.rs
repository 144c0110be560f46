//! # Grader Library
//!
//! Core logic for auto-grading notebook submissions: a student's submitted
//! cells are evaluated against teacher-authored test cases to produce a
//! deterministic score and per-test feedback.
//!
//! ## Key Concepts
//! - **TestSpec**: a closed set of check variants (`output_match`,
//!   `code_contains`, `function_exists`, `variable_value`), dispatched
//!   exhaustively.
//! - **Checks**: isolated, named matching functions, one per variant.
//! - **GradeResult**: totals plus one feedback entry per test case, in input
//!   order; hidden entries are filtered out for the student view only.
//!
//! The evaluator is a pure function: no I/O, no clock, no shared state.
//! Persistence and transport belong to the caller.

pub mod checks;
pub mod error;
pub mod feedback;
pub mod parser;
pub mod scorer;
pub mod types;

use crate::checks::CheckOutcome;
use crate::types::{FeedbackEntry, GradeResult, SubmissionCell, TestCase, TestCaseRow, TestSpec};

/// Evaluate one test case against the submission's cells.
///
/// A `cell_index` past the end of the cell sequence grades against an empty
/// cell; the check then fails naturally rather than erroring.
fn evaluate_case(cells: &[SubmissionCell], case: &TestCase) -> FeedbackEntry {
    let empty = SubmissionCell::default();
    let cell = cells.get(case.cell_index).unwrap_or(&empty);

    let outcome: CheckOutcome = match &case.spec {
        TestSpec::OutputMatch {
            expected_output,
            exact_match,
        } => checks::output_match::check(expected_output, *exact_match, &cell.output),
        TestSpec::CodeContains { contains } => {
            checks::code_contains::check(contains, &cell.content)
        }
        TestSpec::FunctionExists { function_name } => {
            checks::function_exists::check(function_name, &cell.content)
        }
        TestSpec::VariableValue {
            variable_name,
            expected_value,
        } => checks::variable_value::check(
            variable_name,
            expected_value,
            &cell.content,
            &cell.output,
        ),
    };

    tracing::debug!(
        test_id = %case.id,
        test_type = case.spec.kind(),
        cell_index = case.cell_index,
        passed = outcome.passed,
        "evaluated test case"
    );

    feedback::entry_for_outcome(case, outcome)
}

/// Grade a submission against typed test cases.
///
/// Processes test cases in input order, producing exactly one feedback entry
/// per case, then aggregates totals. Deterministic: identical inputs always
/// yield an identical result. Inputs are never mutated.
///
/// # Arguments
/// * `cells` - The submission's cells, positionally indexed.
/// * `test_cases` - The assignment's test cases, in authoring order.
pub fn evaluate(cells: &[SubmissionCell], test_cases: &[TestCase]) -> GradeResult {
    let entries: Vec<FeedbackEntry> = test_cases
        .iter()
        .map(|case| evaluate_case(cells, case))
        .collect();

    result_from_entries(entries)
}

/// Grade a submission against raw, unvalidated test-case rows.
///
/// Each row is parsed into a typed test case first. A row that fails parsing
/// (unknown `test_type`, missing config field) is soft-failed: it becomes a
/// failed feedback entry worth 0 of its points, with the configuration error's
/// message, and grading continues with the remaining rows. The defective row
/// still counts toward the maximum score so totals stay comparable across
/// submissions of the same assignment.
pub fn grade_rows(cells: &[SubmissionCell], rows: &[TestCaseRow]) -> GradeResult {
    let entries: Vec<FeedbackEntry> = rows
        .iter()
        .map(|row| match parser::parse_row(row) {
            Ok(case) => evaluate_case(cells, &case),
            Err(err) => {
                tracing::warn!(test_id = %row.id, %err, "test case has a configuration error");
                feedback::entry_for_config_error(row, &err)
            }
        })
        .collect();

    result_from_entries(entries)
}

fn result_from_entries(feedback: Vec<FeedbackEntry>) -> GradeResult {
    let totals = scorer::compute_totals(&feedback);
    GradeResult {
        total_score: totals.total_score,
        max_score: totals.max_score,
        percentage: totals.percentage,
        feedback,
    }
}
