//! User's country conditionlet
//!
//! Matches against the country resolved from the request's client address
//! (`geo.country`). Codes compare case-insensitively.

use super::{ensure_operator, required_text, Conditionlet};
use crate::context::{fact, EvaluationContext};
use crate::error::{Result, RuntimeError};
use cohort_core::{op, InputDescriptor, Operator, ParameterValues, Value};

/// Conditionlet over the visitor's resolved country
pub struct UsersCountryConditionlet {
    operators: Vec<Operator>,
    single_inputs: Vec<InputDescriptor>,
    list_inputs: Vec<InputDescriptor>,
}

impl UsersCountryConditionlet {
    pub const ID: &'static str = "usersCountry";

    pub fn new() -> Self {
        Self {
            operators: vec![
                Operator::new(op::IS, "Is"),
                Operator::new(op::IS_NOT, "Is not"),
                Operator::new(op::ONE_OF, "Is one of"),
            ],
            single_inputs: vec![InputDescriptor::text("countryCode")
                .required()
                .with_pattern("^[A-Za-z]{2}$")],
            list_inputs: vec![InputDescriptor::text("countryCodes").required()],
        }
    }
}

impl Default for UsersCountryConditionlet {
    fn default() -> Self {
        Self::new()
    }
}

impl Conditionlet for UsersCountryConditionlet {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "User's Country"
    }

    fn operators(&self) -> &[Operator] {
        &self.operators
    }

    fn inputs_for(&self, operator_id: &str) -> Result<&[InputDescriptor]> {
        ensure_operator(Self::ID, &self.operators, operator_id)?;
        if operator_id == op::ONE_OF {
            Ok(&self.list_inputs)
        } else {
            Ok(&self.single_inputs)
        }
    }

    fn evaluate(
        &self,
        operator_id: &str,
        parameters: &ParameterValues,
        context: &EvaluationContext,
    ) -> Result<bool> {
        ensure_operator(Self::ID, &self.operators, operator_id)?;

        let Some(country) = context.fact(fact::GEO_COUNTRY).and_then(Value::as_str) else {
            return Ok(false);
        };

        match operator_id {
            op::IS => {
                let expected = required_text(parameters, "countryCode")?;
                Ok(country.eq_ignore_ascii_case(expected))
            }
            op::IS_NOT => {
                let expected = required_text(parameters, "countryCode")?;
                Ok(!country.eq_ignore_ascii_case(expected))
            }
            op::ONE_OF => {
                // Comma-separated list, e.g. "US, CA, MX"
                let expected = required_text(parameters, "countryCodes")?;
                let mut codes = expected.split(',').map(str::trim).filter(|code| !code.is_empty());
                if codes.clone().next().is_none() {
                    return Err(RuntimeError::InvalidParameter {
                        field: "countryCodes".to_string(),
                        reason: "expected at least one country code".to_string(),
                    });
                }
                Ok(codes.any(|code| country.eq_ignore_ascii_case(code)))
            }
            // ensure_operator already rejected anything else
            _ => unreachable!(),
        }
    }
}
