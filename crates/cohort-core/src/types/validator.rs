//! Parameter validation against input descriptors
//!
//! Validation is total and fail-fast: descriptors are checked in declaration
//! order and the first violation is reported, giving callers a stable error
//! for a given submission. A successful pass returns the fully-bound map
//! with defaults substituted and values coerced to their declared types.

use super::input::{InputDescriptor, InputType};
use super::params::ParameterValues;
use super::value::Value;
use crate::error::{Result, ValidationError};
use regex::Regex;

/// Validate submitted values against an operator's input descriptors.
///
/// Checks, per descriptor in order: presence (substituting the default for
/// absent optional inputs), type coercion, then allowed-values and pattern
/// constraints. After the descriptor pass, any submitted key not named by a
/// descriptor is rejected; unknown keys are reported in lexicographic order
/// so the failure is deterministic.
pub fn validate_parameters(
    descriptors: &[InputDescriptor],
    values: &ParameterValues,
) -> Result<ParameterValues> {
    let mut bound = ParameterValues::new();

    for descriptor in descriptors {
        match values.get(&descriptor.name) {
            None => match &descriptor.default {
                Some(default) => bound.insert(&descriptor.name, default.clone()),
                None => {
                    if descriptor.required {
                        return Err(ValidationError::MissingRequiredInput {
                            field: descriptor.name.clone(),
                        });
                    }
                }
            },
            Some(value) => {
                let coerced = coerce(descriptor, value)?;
                check_constraints(descriptor, &coerced)?;
                bound.insert(&descriptor.name, coerced);
            }
        }
    }

    let mut unknown: Vec<&str> = values
        .keys()
        .filter(|key| !descriptors.iter().any(|d| d.name == *key))
        .collect();
    unknown.sort_unstable();
    if let Some(field) = unknown.first() {
        return Err(ValidationError::UnknownParameter {
            field: field.to_string(),
        });
    }

    Ok(bound)
}

/// Coerce a submitted value to the descriptor's declared type
fn coerce(descriptor: &InputDescriptor, value: &Value) -> Result<Value> {
    let coerced = match descriptor.input_type {
        InputType::Text | InputType::Enumeration => {
            value.as_str().map(|s| Value::String(s.to_string()))
        }
        InputType::Numeric => value.as_f64().map(Value::Number),
        InputType::Boolean => value.as_bool().map(Value::Bool),
    };

    coerced.ok_or_else(|| ValidationError::TypeMismatch {
        field: descriptor.name.clone(),
        expected: descriptor.input_type.name().to_string(),
        actual: value.type_name().to_string(),
    })
}

/// Check allowed-values and pattern constraints on a coerced value
fn check_constraints(descriptor: &InputDescriptor, value: &Value) -> Result<()> {
    // Allowed values and patterns bind text inputs only
    let Some(text) = value.as_str() else {
        return Ok(());
    };

    if !descriptor.allowed_values.is_empty()
        && !descriptor.allowed_values.iter().any(|allowed| allowed == text)
    {
        return Err(ValidationError::ConstraintViolation {
            field: descriptor.name.clone(),
            reason: format!("'{}' is not one of the allowed values", text),
        });
    }

    if let Some(pattern) = &descriptor.pattern {
        let regex = Regex::new(pattern).map_err(|e| ValidationError::ConstraintViolation {
            field: descriptor.name.clone(),
            reason: format!("invalid pattern '{}': {}", pattern, e),
        })?;
        if !regex.is_match(text) {
            return Err(ValidationError::ConstraintViolation {
                field: descriptor.name.clone(),
                reason: format!("'{}' does not match pattern '{}'", text, pattern),
            });
        }
    }

    Ok(())
}
