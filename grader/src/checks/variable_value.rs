//! A check that looks for a variable holding an expected value.
//!
//! The pattern is the variable name followed, anywhere later in the string, by
//! the expected value, matched case-insensitively against the cell's output
//! and its source independently; either match suffices. This is intentionally
//! permissive and will produce false positives (e.g. the value appearing in an
//! unrelated later statement). It is documented as a weak heuristic and must
//! not be tightened silently.

use super::CheckOutcome;
use regex::Regex;

/// Check whether `variable_name` appears followed by `expected_value` in the
/// cell's output or source.
///
/// # Arguments
///
/// * `variable_name` - The variable to look for.
/// * `expected_value` - The value expected to appear after the name.
/// * `content` - The cell's source code.
/// * `output` - The cell's captured output.
pub fn check(
    variable_name: &str,
    expected_value: &str,
    content: &str,
    output: &str,
) -> CheckOutcome {
    let pattern = format!(
        r"(?is){}.*{}",
        regex::escape(variable_name),
        regex::escape(expected_value)
    );
    let regex = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(_) => {
            return CheckOutcome::fail(format!(
                "Could not build value pattern for variable \"{variable_name}\""
            ));
        }
    };

    if regex.is_match(output) || regex.is_match(content) {
        CheckOutcome::pass(format!(
            "Variable \"{variable_name}\" appears to hold {expected_value}"
        ))
    } else {
        CheckOutcome::fail(format!(
            "Variable \"{variable_name}\" does not appear to hold {expected_value}"
        ))
    }
}
