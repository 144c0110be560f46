//! A check that compares a cell's captured output against an expected string.
//!
//! Two modes are supported. In exact mode the trimmed output must equal the
//! trimmed expected string character for character (case-sensitive). In
//! substring mode the comparison is case-insensitive containment, which
//! tolerates prompts, prefixes, and other noise around the expected text.

use super::CheckOutcome;

/// Compare the cell's output against `expected_output`.
///
/// # Arguments
///
/// * `expected_output` - The teacher-supplied expected output.
/// * `exact_match` - If true, compare trimmed strings for equality; otherwise
///   check lowercase containment.
/// * `output` - The cell's captured output, as submitted.
///
/// # Returns
///
/// Returns a [`CheckOutcome`]. Failure messages carry both the expected and
/// actual output verbatim so students can see the difference.
pub fn check(expected_output: &str, exact_match: bool, output: &str) -> CheckOutcome {
    let passed = if exact_match {
        output.trim() == expected_output.trim()
    } else {
        output.to_lowercase().contains(&expected_output.to_lowercase())
    };

    if passed {
        CheckOutcome::pass("Output matches expected result")
    } else {
        CheckOutcome::fail(format!(
            "Expected output \"{expected_output}\", got \"{output}\""
        ))
    }
}
