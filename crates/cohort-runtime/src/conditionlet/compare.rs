//! Shared string comparison semantics
//!
//! The built-in conditionlets that compare text facts all route through
//! here, so "contains" or "matches-regex" behave identically whether the
//! fact is a header value, a request path, or a session attribute.

use crate::error::{Result, RuntimeError};
use cohort_core::op;
use regex::Regex;

/// Apply a string comparison operator.
///
/// `field` names the parameter that supplied `expected`, so a bad regex is
/// reported against the offending input.
pub(crate) fn string_compare(
    conditionlet_id: &str,
    operator_id: &str,
    field: &str,
    fact: &str,
    expected: &str,
) -> Result<bool> {
    match operator_id {
        op::IS => Ok(fact == expected),
        op::IS_NOT => Ok(fact != expected),
        op::CONTAINS => Ok(fact.contains(expected)),
        op::STARTS_WITH => Ok(fact.starts_with(expected)),
        op::ENDS_WITH => Ok(fact.ends_with(expected)),
        op::MATCHES_REGEX => {
            let regex = Regex::new(expected).map_err(|e| RuntimeError::InvalidParameter {
                field: field.to_string(),
                reason: format!("invalid regular expression '{}': {}", expected, e),
            })?;
            Ok(regex.is_match(fact))
        }
        other => Err(RuntimeError::UnknownOperator {
            conditionlet: conditionlet_id.to_string(),
            operator: other.to_string(),
        }),
    }
}
