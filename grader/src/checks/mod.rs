//! # Checks
//!
//! One module per supported test type. Each check is a free function from a
//! test configuration plus the targeted cell's text to a [`CheckOutcome`],
//! keeping the matching heuristics isolated and independently testable so a
//! weak heuristic can be replaced without touching aggregation logic.
//!
//! The available checks are:
//! - [`output_match`]: compares the cell's captured output against an expected string.
//! - [`code_contains`]: looks for a required substring in the cell's source.
//! - [`function_exists`]: looks for a function-definition pattern in the cell's source.
//! - [`variable_value`]: looks for a variable/value pattern in output or source.

pub mod code_contains;
pub mod function_exists;
pub mod output_match;
pub mod variable_value;

/// The outcome of running a single check against a single cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Whether the check passed.
    pub passed: bool,
    /// Human-readable description of the outcome, suitable for feedback.
    pub message: String,
}

impl CheckOutcome {
    /// Build a passing outcome with the given message.
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
        }
    }

    /// Build a failing outcome with the given message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }
}
