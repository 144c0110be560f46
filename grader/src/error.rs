//! Grader Error Types
//!
//! This module defines the [`GraderError`] enum, which covers the configuration
//! errors that can occur while turning teacher-authored test-case rows into typed
//! test specifications.
//!
//! All variants are configuration errors: they describe a defect in a single test
//! case's definition, never in the student's submission. Grading policy is to
//! soft-fail the offending test case (zero points, explanatory feedback message)
//! and keep grading the remaining cases, so one bad row never aborts a whole
//! submission.

use std::fmt;

/// Represents a configuration error found in a single test-case definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraderError {
    /// The `test_type` tag is not one of the four supported types.
    UnknownTestType(String),
    /// A required field is missing from the `test_config` payload.
    MissingConfigField {
        /// The test type whose config is incomplete.
        test_type: String,
        /// The name of the missing field.
        field: String,
    },
    /// The `test_config` payload has an unusable shape (e.g. not an object,
    /// or a field holds a value that cannot be interpreted).
    InvalidConfig(String),
}

impl fmt::Display for GraderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraderError::UnknownTestType(test_type) => {
                write!(f, "Unknown test type \"{test_type}\"")
            }
            GraderError::MissingConfigField { test_type, field } => {
                write!(
                    f,
                    "Test config for \"{test_type}\" is missing required field \"{field}\""
                )
            }
            GraderError::InvalidConfig(msg) => write!(f, "Invalid test config: {msg}"),
        }
    }
}

impl std::error::Error for GraderError {}
