//! Visited URL conditionlet
//!
//! Matches against the path of the current request (`request.path`).

use super::{compare, ensure_operator, required_text, Conditionlet};
use crate::context::{fact, EvaluationContext};
use crate::error::Result;
use cohort_core::{op, InputDescriptor, Operator, ParameterValues, Value};

/// Conditionlet over the visited URL path
pub struct VisitedUrlConditionlet {
    operators: Vec<Operator>,
    inputs: Vec<InputDescriptor>,
}

impl VisitedUrlConditionlet {
    pub const ID: &'static str = "visitedUrl";

    pub fn new() -> Self {
        Self {
            operators: vec![
                Operator::new(op::IS, "Is"),
                Operator::new(op::IS_NOT, "Is not"),
                Operator::new(op::CONTAINS, "Contains"),
                Operator::new(op::STARTS_WITH, "Starts with"),
                Operator::new(op::ENDS_WITH, "Ends with"),
                Operator::new(op::MATCHES_REGEX, "Matches regex"),
            ],
            inputs: vec![InputDescriptor::text("urlFragment").required()],
        }
    }
}

impl Default for VisitedUrlConditionlet {
    fn default() -> Self {
        Self::new()
    }
}

impl Conditionlet for VisitedUrlConditionlet {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "Visited URL"
    }

    fn operators(&self) -> &[Operator] {
        &self.operators
    }

    fn inputs_for(&self, operator_id: &str) -> Result<&[InputDescriptor]> {
        ensure_operator(Self::ID, &self.operators, operator_id)?;
        Ok(&self.inputs)
    }

    fn evaluate(
        &self,
        operator_id: &str,
        parameters: &ParameterValues,
        context: &EvaluationContext,
    ) -> Result<bool> {
        ensure_operator(Self::ID, &self.operators, operator_id)?;
        let expected = required_text(parameters, "urlFragment")?;

        let Some(path) = context.fact(fact::REQUEST_PATH).and_then(Value::as_str) else {
            return Ok(false);
        };

        compare::string_compare(Self::ID, operator_id, "urlFragment", path, expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(value: &str) -> ParameterValues {
        ParameterValues::new().with("urlFragment", value)
    }

    #[test]
    fn test_contains_promo_path() {
        let conditionlet = VisitedUrlConditionlet::new();
        let context = EvaluationContext::new().with_path("/promo/page1");

        assert!(conditionlet
            .evaluate(op::CONTAINS, &fragment("/promo"), &context)
            .unwrap());
    }

    #[test]
    fn test_contains_misses_other_path() {
        let conditionlet = VisitedUrlConditionlet::new();
        let context = EvaluationContext::new().with_path("/other");

        assert!(!conditionlet
            .evaluate(op::CONTAINS, &fragment("/promo"), &context)
            .unwrap());
    }

    #[test]
    fn test_is_exact_path() {
        let conditionlet = VisitedUrlConditionlet::new();
        let context = EvaluationContext::new().with_path("/checkout");

        assert!(conditionlet.evaluate(op::IS, &fragment("/checkout"), &context).unwrap());
        assert!(!conditionlet
            .evaluate(op::IS, &fragment("/checkout/"), &context)
            .unwrap());
    }

    #[test]
    fn test_missing_path_is_no_match() {
        let conditionlet = VisitedUrlConditionlet::new();
        let context = EvaluationContext::new();

        assert!(!conditionlet
            .evaluate(op::CONTAINS, &fragment("/promo"), &context)
            .unwrap());
    }

    #[test]
    fn test_inputs_declare_url_fragment() {
        let conditionlet = VisitedUrlConditionlet::new();
        let inputs = conditionlet.inputs_for(op::CONTAINS).unwrap();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].name, "urlFragment");
        assert!(inputs[0].required);
    }
}
