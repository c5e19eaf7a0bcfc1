//! Session attribute conditionlet
//!
//! Matches against session attribute facts (`session.attr.<name>`).
//! Attributes may be text or numeric; "is" / "is not" compare numerically
//! when the stored attribute is a number.

use super::{compare, ensure_operator, required_text, Conditionlet};
use crate::context::EvaluationContext;
use crate::error::Result;
use cohort_core::{op, InputDescriptor, Operator, ParameterValues, Value};

/// Conditionlet over session attributes
pub struct SessionAttributeConditionlet {
    operators: Vec<Operator>,
    value_inputs: Vec<InputDescriptor>,
    presence_inputs: Vec<InputDescriptor>,
}

impl SessionAttributeConditionlet {
    pub const ID: &'static str = "sessionAttribute";

    pub fn new() -> Self {
        Self {
            operators: vec![
                Operator::new(op::IS, "Is"),
                Operator::new(op::IS_NOT, "Is not"),
                Operator::new(op::EXISTS, "Exists"),
                Operator::new(op::CONTAINS, "Contains"),
            ],
            value_inputs: vec![
                InputDescriptor::text("attributeName").required(),
                InputDescriptor::text("attributeValue").required(),
            ],
            presence_inputs: vec![InputDescriptor::text("attributeName").required()],
        }
    }
}

impl Default for SessionAttributeConditionlet {
    fn default() -> Self {
        Self::new()
    }
}

impl Conditionlet for SessionAttributeConditionlet {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "Session Attribute"
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
        let attribute_name = required_text(parameters, "attributeName")?;

        if operator_id == op::EXISTS {
            return Ok(context.session_attr(attribute_name).is_some());
        }

        let expected = required_text(parameters, "attributeValue")?;
        let Some(attribute) = context.session_attr(attribute_name) else {
            return Ok(false);
        };

        match attribute {
            Value::String(text) => {
                compare::string_compare(Self::ID, operator_id, "attributeValue", text, expected)
            }
            Value::Number(number) => {
                // Numeric attributes compare by value for is / is-not
                let matched = expected
                    .trim()
                    .parse::<f64>()
                    .map(|submitted| submitted == *number)
                    .unwrap_or(false);
                match operator_id {
                    op::IS => Ok(matched),
                    op::IS_NOT => Ok(!matched),
                    _ => Ok(false),
                }
            }
            _ => Ok(false),
        }
    }
}
