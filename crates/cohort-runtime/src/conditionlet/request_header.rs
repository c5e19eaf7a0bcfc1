//! Request header conditionlet
//!
//! Matches against the value of a request header fact
//! (`request.header.<name>`, names lowercased by the context).

use super::{compare, ensure_operator, required_text, Conditionlet};
use crate::context::EvaluationContext;
use crate::error::Result;
use cohort_core::{op, InputDescriptor, Operator, ParameterValues, Value};

/// Conditionlet over request header values
pub struct RequestHeaderConditionlet {
    operators: Vec<Operator>,
    value_inputs: Vec<InputDescriptor>,
    presence_inputs: Vec<InputDescriptor>,
}

impl RequestHeaderConditionlet {
    pub const ID: &'static str = "requestHeader";

    pub fn new() -> Self {
        Self {
            operators: vec![
                Operator::new(op::IS, "Is"),
                Operator::new(op::IS_NOT, "Is not"),
                Operator::new(op::EXISTS, "Exists"),
                Operator::new(op::CONTAINS, "Contains"),
                Operator::new(op::STARTS_WITH, "Starts with"),
                Operator::new(op::ENDS_WITH, "Ends with"),
                Operator::new(op::MATCHES_REGEX, "Matches regex"),
            ],
            value_inputs: vec![
                InputDescriptor::text("headerName").required(),
                InputDescriptor::text("headerValue").required(),
            ],
            presence_inputs: vec![InputDescriptor::text("headerName").required()],
        }
    }
}

impl Default for RequestHeaderConditionlet {
    fn default() -> Self {
        Self::new()
    }
}

impl Conditionlet for RequestHeaderConditionlet {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "Request Header"
    }

    fn operators(&self) -> &[Operator] {
        &self.operators
    }

    fn inputs_for(&self, operator_id: &str) -> Result<&[InputDescriptor]> {
        ensure_operator(Self::ID, &self.operators, operator_id)?;
        if operator_id == op::EXISTS {
            Ok(&self.presence_inputs)
        } else {
            Ok(&self.value_inputs)
        }
    }

    fn evaluate(
        &self,
        operator_id: &str,
        parameters: &ParameterValues,
        context: &EvaluationContext,
    ) -> Result<bool> {
        ensure_operator(Self::ID, &self.operators, operator_id)?;
        let header_name = required_text(parameters, "headerName")?;

        if operator_id == op::EXISTS {
            return Ok(context.header(header_name).is_some());
        }

        let expected = required_text(parameters, "headerValue")?;
        let Some(fact) = context.header(header_name).and_then(Value::as_str) else {
            return Ok(false);
        };

        compare::string_compare(Self::ID, operator_id, "headerValue", fact, expected)
    }
}
