//! A check that looks for a function definition in the cell's source.
//!
//! This is a structural textual pattern, not a parse: a definition keyword
//! (`def` or `function`, covering the Python and JavaScript cells notebooks
//! hold), whitespace, the exact function name, optional whitespace, then an
//! opening parenthesis, matched case-insensitively. Occurrences inside
//! comments or string literals are accepted false positives of the heuristic.

use super::CheckOutcome;
use regex::Regex;

/// Check whether the cell's source defines a function named `function_name`.
///
/// The name must match exactly before the parenthesis: `functionName = "add"`
/// is not satisfied by `def addition(...)`.
///
/// # Arguments
///
/// * `function_name` - The required function name.
/// * `content` - The cell's source code, as authored.
pub fn check(function_name: &str, content: &str) -> CheckOutcome {
    let pattern = format!(
        r"(?i)\b(?:def|function)\s+{}\s*\(",
        regex::escape(function_name)
    );
    let regex = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(_) => {
            return CheckOutcome::fail(format!(
                "Could not build definition pattern for function \"{function_name}\""
            ));
        }
    };

    if regex.is_match(content) {
        CheckOutcome::pass(format!("Function \"{function_name}\" is defined"))
    } else {
        CheckOutcome::fail(format!("Function \"{function_name}\" is not defined"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_def_passes() {
        let result = check("add", "def add(a, b):\n    return a + b");
        assert!(result.passed);
    }

    #[test]
    fn test_longer_identifier_does_not_match() {
        let result = check("add", "def addition(a, b):\n    return a + b");
        assert!(!result.passed);
        assert_eq!(result.message, "Function \"add\" is not defined");
    }

    #[test]
    fn test_javascript_function_keyword_passes() {
        let result = check("add", "function add(a, b) { return a + b; }");
        assert!(result.passed);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let result = check("Add", "DEF ADD(a, b):");
        assert!(result.passed);
    }

    #[test]
    fn test_whitespace_before_parenthesis_allowed() {
        let result = check("add", "def add  (a, b):");
        assert!(result.passed);
    }

    #[test]
    fn test_call_without_definition_fails() {
        let result = check("add", "result = add(1, 2)");
        assert!(!result.passed);
    }

    #[test]
    fn test_name_with_regex_metacharacters_is_escaped() {
        // A pathological name must not panic or match spuriously.
        let result = check("a+b", "def add(a, b):");
        assert!(!result.passed);
    }

    #[test]
    fn test_empty_content_fails() {
        assert!(!check("add", "").passed);
    }
}
