//! Test-Case Row Parser
//!
//! Turns raw, wire-form [`TestCaseRow`]s into typed [`TestCase`]s, validating
//! the `test_type` tag and the per-type `test_config` payload. Rejection is
//! always explicit: an unknown tag or a missing required field yields a
//! [`GraderError`] describing exactly which test case is defective, never a
//! silent skip.
//!
//! Config payloads are accepted with either snake_case or camelCase keys
//! (`expected_output` / `expectedOutput`), since test cases authored through
//! older front-end builds used camelCase.

use crate::error::GraderError;
use crate::types::{TestCase, TestCaseRow, TestSpec};
use serde_json::Value;

/// Parse one raw row into a typed test case.
///
/// # Errors
///
/// Returns a [`GraderError`] when the row's `test_type` is not one of the four
/// supported tags, or when its `test_config` is missing a required field or
/// holds a value that cannot be read as a string.
pub fn parse_row(row: &TestCaseRow) -> Result<TestCase, GraderError> {
    let spec = match row.test_type.as_str() {
        "output_match" => TestSpec::OutputMatch {
            expected_output: required_string(
                &row.test_config,
                &row.test_type,
                &["expected_output", "expectedOutput"],
            )?,
            exact_match: optional_bool(&row.test_config, &["exact_match", "exactMatch"]),
        },
        "code_contains" => TestSpec::CodeContains {
            contains: required_string(&row.test_config, &row.test_type, &["contains"])?,
        },
        "function_exists" => TestSpec::FunctionExists {
            function_name: required_string(
                &row.test_config,
                &row.test_type,
                &["function_name", "functionName"],
            )?,
        },
        "variable_value" => TestSpec::VariableValue {
            variable_name: required_string(
                &row.test_config,
                &row.test_type,
                &["variable_name", "variableName"],
            )?,
            expected_value: required_string(
                &row.test_config,
                &row.test_type,
                &["expected_value", "expectedValue"],
            )?,
        },
        other => return Err(GraderError::UnknownTestType(other.to_string())),
    };

    Ok(TestCase {
        id: row.id.clone(),
        cell_index: row.cell_index,
        spec,
        points: row.points,
        is_hidden: row.is_hidden,
    })
}

/// Look up the first present key and read it as a string.
///
/// Numbers and booleans are stringified, since teachers author values like
/// `expected_value: 42` as JSON numbers. The first key name is reported when
/// none are present.
fn required_string(
    config: &Value,
    test_type: &str,
    keys: &[&str],
) -> Result<String, GraderError> {
    for key in keys {
        if let Some(value) = config.get(key) {
            return match value {
                Value::String(s) => Ok(s.clone()),
                Value::Number(n) => Ok(n.to_string()),
                Value::Bool(b) => Ok(b.to_string()),
                _ => Err(GraderError::InvalidConfig(format!(
                    "field \"{key}\" of \"{test_type}\" config must be a string"
                ))),
            };
        }
    }
    Err(GraderError::MissingConfigField {
        test_type: test_type.to_string(),
        field: keys[0].to_string(),
    })
}

/// Look up the first present key and read it as a bool; absent means false.
fn optional_bool(config: &Value, keys: &[&str]) -> bool {
    keys.iter()
        .find_map(|key| config.get(key).and_then(Value::as_bool))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(test_type: &str, config: Value) -> TestCaseRow {
        TestCaseRow {
            id: "tc-1".to_string(),
            cell_index: 0,
            test_type: test_type.to_string(),
            test_config: config,
            points: 5.0,
            is_hidden: false,
        }
    }

    #[test]
    fn test_parse_output_match() {
        let case = parse_row(&row(
            "output_match",
            json!({ "expected_output": "Hello", "exact_match": true }),
        ))
        .unwrap();
        assert_eq!(
            case.spec,
            TestSpec::OutputMatch {
                expected_output: "Hello".to_string(),
                exact_match: true,
            }
        );
        assert_eq!(case.points, 5.0);
    }

    #[test]
    fn test_exact_match_defaults_to_false() {
        let case = parse_row(&row("output_match", json!({ "expected_output": "x" }))).unwrap();
        assert_eq!(
            case.spec,
            TestSpec::OutputMatch {
                expected_output: "x".to_string(),
                exact_match: false,
            }
        );
    }

    #[test]
    fn test_parse_accepts_camel_case_keys() {
        let case = parse_row(&row(
            "output_match",
            json!({ "expectedOutput": "Hello", "exactMatch": true }),
        ))
        .unwrap();
        assert_eq!(
            case.spec,
            TestSpec::OutputMatch {
                expected_output: "Hello".to_string(),
                exact_match: true,
            }
        );
    }

    #[test]
    fn test_parse_code_contains() {
        let case = parse_row(&row("code_contains", json!({ "contains": "for" }))).unwrap();
        assert_eq!(
            case.spec,
            TestSpec::CodeContains {
                contains: "for".to_string()
            }
        );
    }

    #[test]
    fn test_parse_function_exists() {
        let case =
            parse_row(&row("function_exists", json!({ "function_name": "add" }))).unwrap();
        assert_eq!(
            case.spec,
            TestSpec::FunctionExists {
                function_name: "add".to_string()
            }
        );
    }

    #[test]
    fn test_parse_variable_value_stringifies_numbers() {
        let case = parse_row(&row(
            "variable_value",
            json!({ "variable_name": "x", "expected_value": 42 }),
        ))
        .unwrap();
        assert_eq!(
            case.spec,
            TestSpec::VariableValue {
                variable_name: "x".to_string(),
                expected_value: "42".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_test_type_is_rejected() {
        let err = parse_row(&row("regex_match", json!({}))).unwrap_err();
        assert_eq!(err, GraderError::UnknownTestType("regex_match".to_string()));
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let err = parse_row(&row("code_contains", json!({}))).unwrap_err();
        assert_eq!(
            err,
            GraderError::MissingConfigField {
                test_type: "code_contains".to_string(),
                field: "contains".to_string(),
            }
        );
    }

    #[test]
    fn test_null_config_reports_missing_field() {
        let err = parse_row(&row("function_exists", Value::Null)).unwrap_err();
        assert!(matches!(err, GraderError::MissingConfigField { .. }));
    }

    #[test]
    fn test_non_scalar_field_is_invalid() {
        let err = parse_row(&row("code_contains", json!({ "contains": ["a"] }))).unwrap_err();
        assert!(matches!(err, GraderError::InvalidConfig(_)));
    }
}
