//! A check that requires a substring in the cell's source code.
//!
//! The comparison is case-insensitive containment against the cell *content*
//! (what the student wrote), not its output. Useful for enforcing that a
//! particular construct was used, e.g. `for i in range`.

use super::CheckOutcome;

/// Check whether the cell's source contains `needle`, ignoring case.
///
/// # Arguments
///
/// * `needle` - The required substring.
/// * `content` - The cell's source code, as authored.
pub fn check(needle: &str, content: &str) -> CheckOutcome {
    if content.to_lowercase().contains(&needle.to_lowercase()) {
        CheckOutcome::pass(format!("Code contains required pattern \"{needle}\""))
    } else {
        CheckOutcome::fail(format!("Code does not contain required pattern \"{needle}\""))
    }
}
