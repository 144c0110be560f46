//! # Feedback Module
//!
//! Shapes per-test results into [`FeedbackEntry`]s and applies the visibility
//! rule: hidden tests are scored like any other test, but their detailed
//! entries are withheld from the student-facing view. The persisted record
//! always keeps the full list.

use crate::checks::CheckOutcome;
use crate::error::GraderError;
use crate::types::{FeedbackEntry, TestCase, TestCaseRow};

/// Build the feedback entry for a test case that was actually evaluated.
pub fn entry_for_outcome(case: &TestCase, outcome: CheckOutcome) -> FeedbackEntry {
    FeedbackEntry {
        cell_index: case.cell_index,
        test_type: case.spec.kind().to_string(),
        passed: outcome.passed,
        points_earned: if outcome.passed { case.points } else { 0.0 },
        points_possible: case.points,
        message: outcome.message,
        is_hidden: case.is_hidden,
    }
}

/// Build the feedback entry for a row that could not be parsed into a typed
/// test case.
///
/// The row still occupies its slot in the feedback list and still contributes
/// its `points` to the maximum score; it just cannot be passed. The error's
/// message tells the teacher what to fix.
pub fn entry_for_config_error(row: &TestCaseRow, err: &GraderError) -> FeedbackEntry {
    FeedbackEntry {
        cell_index: row.cell_index,
        test_type: row.test_type.clone(),
        passed: false,
        points_earned: 0.0,
        points_possible: row.points,
        message: err.to_string(),
        is_hidden: row.is_hidden,
    }
}

/// The student-facing subsequence of a feedback list: entries whose test case
/// is not hidden, in their original order.
pub fn visible(entries: &[FeedbackEntry]) -> Vec<FeedbackEntry> {
    entries
        .iter()
        .filter(|entry| !entry.is_hidden)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TestSpec;
    use serde_json::json;

    fn case(points: f64, hidden: bool) -> TestCase {
        TestCase {
            id: "tc".to_string(),
            cell_index: 1,
            spec: TestSpec::CodeContains {
                contains: "for".to_string(),
            },
            points,
            is_hidden: hidden,
        }
    }

    #[test]
    fn test_passed_outcome_earns_full_points() {
        let entry = entry_for_outcome(&case(5.0, false), CheckOutcome::pass("ok"));
        assert!(entry.passed);
        assert_eq!(entry.points_earned, 5.0);
        assert_eq!(entry.points_possible, 5.0);
        assert_eq!(entry.test_type, "code_contains");
    }

    #[test]
    fn test_failed_outcome_earns_zero() {
        let entry = entry_for_outcome(&case(5.0, true), CheckOutcome::fail("nope"));
        assert!(!entry.passed);
        assert_eq!(entry.points_earned, 0.0);
        assert_eq!(entry.points_possible, 5.0);
        assert!(entry.is_hidden);
        assert_eq!(entry.message, "nope");
    }

    #[test]
    fn test_config_error_entry_keeps_points_possible_and_raw_tag() {
        let row = TestCaseRow {
            id: "tc".to_string(),
            cell_index: 3,
            test_type: "regex_match".to_string(),
            test_config: json!({}),
            points: 4.0,
            is_hidden: false,
        };
        let err = GraderError::UnknownTestType("regex_match".to_string());
        let entry = entry_for_config_error(&row, &err);
        assert!(!entry.passed);
        assert_eq!(entry.points_earned, 0.0);
        assert_eq!(entry.points_possible, 4.0);
        assert_eq!(entry.test_type, "regex_match");
        assert_eq!(entry.message, "Unknown test type \"regex_match\"");
    }

    #[test]
    fn test_visible_filters_hidden_preserving_order() {
        let entries = vec![
            entry_for_outcome(&case(1.0, false), CheckOutcome::pass("a")),
            entry_for_outcome(&case(2.0, true), CheckOutcome::pass("b")),
            entry_for_outcome(&case(3.0, false), CheckOutcome::fail("c")),
        ];
        let shown = visible(&entries);
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].message, "a");
        assert_eq!(shown[1].message, "c");
    }

    #[test]
    fn test_visible_of_all_hidden_is_empty() {
        let entries = vec![entry_for_outcome(&case(1.0, true), CheckOutcome::pass("a"))];
        assert!(visible(&entries).is_empty());
    }
}
