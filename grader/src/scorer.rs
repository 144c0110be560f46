//! # Scorer Module
//!
//! Aggregates per-test feedback entries into overall totals. The primary
//! function, [`compute_totals`], produces the total score, maximum score, and
//! percentage for a graded submission.

use crate::types::FeedbackEntry;

/// Overall score figures for one graded submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    /// Sum of `points_earned` across all entries.
    pub total_score: f64,
    /// Sum of `points_possible` across all entries.
    pub max_score: f64,
    /// `total_score / max_score * 100`, or 0 when nothing was achievable.
    pub percentage: f64,
}

/// Compute overall totals from a slice of feedback entries.
///
/// Every entry contributes its `points_possible` to the maximum score — hidden
/// tests and tests failed through configuration errors included — while only
/// passed entries carry non-zero `points_earned`.
///
/// # Behavior
///
/// - An empty slice yields all-zero totals.
/// - When `max_score` is 0 (all tests worth 0 points), the percentage is 0
///   rather than a division by zero.
///
/// # Example
///
/// ```
/// use grader::scorer::compute_totals;
/// use grader::types::FeedbackEntry;
///
/// let entries = vec![
///     FeedbackEntry {
///         cell_index: 0,
///         test_type: "code_contains".to_string(),
///         passed: true,
///         points_earned: 5.0,
///         points_possible: 5.0,
///         message: String::new(),
///         is_hidden: false,
///     },
///     FeedbackEntry {
///         cell_index: 1,
///         test_type: "output_match".to_string(),
///         passed: false,
///         points_earned: 0.0,
///         points_possible: 5.0,
///         message: String::new(),
///         is_hidden: true,
///     },
/// ];
///
/// let totals = compute_totals(&entries);
/// assert_eq!(totals.total_score, 5.0);
/// assert_eq!(totals.max_score, 10.0);
/// assert_eq!(totals.percentage, 50.0);
/// ```
pub fn compute_totals(entries: &[FeedbackEntry]) -> Totals {
    let mut total_score = 0.0;
    let mut max_score = 0.0;

    for entry in entries {
        total_score += entry.points_earned;
        max_score += entry.points_possible;
    }

    let percentage = if max_score > 0.0 {
        total_score / max_score * 100.0
    } else {
        0.0
    };

    Totals {
        total_score,
        max_score,
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(passed: bool, points: f64, hidden: bool) -> FeedbackEntry {
        FeedbackEntry {
            cell_index: 0,
            test_type: "output_match".to_string(),
            passed,
            points_earned: if passed { points } else { 0.0 },
            points_possible: points,
            message: String::new(),
            is_hidden: hidden,
        }
    }

    #[test]
    fn test_totals_basic() {
        let entries = vec![entry(true, 10.0, false), entry(false, 10.0, false)];
        let totals = compute_totals(&entries);
        assert_eq!(totals.total_score, 10.0);
        assert_eq!(totals.max_score, 20.0);
        assert_eq!(totals.percentage, 50.0);
    }

    #[test]
    fn test_totals_empty() {
        let totals = compute_totals(&[]);
        assert_eq!(totals.total_score, 0.0);
        assert_eq!(totals.max_score, 0.0);
        assert_eq!(totals.percentage, 0.0);
    }

    #[test]
    fn test_hidden_entries_count_toward_both_scores() {
        let entries = vec![entry(true, 5.0, true), entry(false, 5.0, true)];
        let totals = compute_totals(&entries);
        assert_eq!(totals.total_score, 5.0);
        assert_eq!(totals.max_score, 10.0);
    }

    #[test]
    fn test_all_zero_point_tests_avoid_division_by_zero() {
        let entries = vec![entry(true, 0.0, false), entry(false, 0.0, false)];
        let totals = compute_totals(&entries);
        assert_eq!(totals.max_score, 0.0);
        assert_eq!(totals.percentage, 0.0);
    }

    #[test]
    fn test_fractional_points() {
        let entries = vec![entry(true, 2.5, false), entry(false, 7.5, false)];
        let totals = compute_totals(&entries);
        assert_eq!(totals.total_score, 2.5);
        assert_eq!(totals.max_score, 10.0);
        assert_eq!(totals.percentage, 25.0);
    }

    #[test]
    fn test_all_passed_is_hundred_percent() {
        let entries = vec![entry(true, 3.0, false), entry(true, 7.0, true)];
        let totals = compute_totals(&entries);
        assert_eq!(totals.percentage, 100.0);
    }
}
