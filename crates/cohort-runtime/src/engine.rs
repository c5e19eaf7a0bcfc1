//! Rule evaluation
//!
//! Walks a `RuleExpression` tree depth-first with short-circuiting AND/OR
//! semantics. Lookup and validation failures abort the whole evaluation: a
//! malformed rule never silently evaluates to a boolean.

use crate::context::EvaluationContext;
use crate::error::{Result, RuntimeError};
use crate::registry::ConditionletRegistry;
use cohort_core::{validate_parameters, ConditionLeaf, RuleExpression};

/// Evaluates rule expressions against a sealed registry
#[derive(Debug)]
pub struct RuleEvaluator<'a> {
    registry: &'a ConditionletRegistry,
}

impl<'a> RuleEvaluator<'a> {
    /// Create an evaluator over a sealed registry.
    ///
    /// Fails if the registry is still accepting registrations, so no reader
    /// is admitted before the startup barrier completes.
    pub fn new(registry: &'a ConditionletRegistry) -> Result<Self> {
        if !registry.is_sealed() {
            return Err(RuntimeError::RegistryNotSealed);
        }
        Ok(Self { registry })
    }

    /// Evaluate a rule expression against one request's facts
    pub fn evaluate(
        &self,
        expression: &RuleExpression,
        context: &EvaluationContext,
    ) -> Result<bool> {
        match expression {
            RuleExpression::All(children) => {
                for child in children {
                    if !self.evaluate(child, context)? {
                        return Ok(false);
                    }
                }
                // An empty AND group is vacuously true
                Ok(true)
            }
            RuleExpression::Any(children) => {
                for child in children {
                    if self.evaluate(child, context)? {
                        return Ok(true);
                    }
                }
                // An empty OR group is vacuously false
                Ok(false)
            }
            RuleExpression::Condition(leaf) => self.evaluate_leaf(leaf, context),
        }
    }

    fn evaluate_leaf(&self, leaf: &ConditionLeaf, context: &EvaluationContext) -> Result<bool> {
        let conditionlet = self.registry.find(&leaf.conditionlet)?;
        let inputs = conditionlet.inputs_for(&leaf.operator)?;
        let bound = validate_parameters(inputs, &leaf.parameters)?;
        let matched = conditionlet.evaluate(&leaf.operator, &bound, context)?;

        tracing::debug!(
            "Condition {}/{} evaluated to {} (negate={})",
            leaf.conditionlet,
            leaf.operator,
            matched,
            leaf.negate
        );

        Ok(matched != leaf.negate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditionlet::{builtins, Conditionlet};
    use crate::context::EvaluationContext;
    use cohort_core::{op, InputDescriptor, Operator, ParameterValues, ValidationError};
    use std::sync::Arc;

    /// Fixture conditionlet that fails the whole evaluation if reached
    struct PoisonConditionlet {
        operators: Vec<Operator>,
        inputs: Vec<InputDescriptor>,
    }

    impl PoisonConditionlet {
        fn new() -> Self {
            Self {
                operators: vec![Operator::new(op::IS, "Is")],
                inputs: vec![InputDescriptor::text("value")],
            }
        }
    }

    impl Conditionlet for PoisonConditionlet {
        fn id(&self) -> &str {
            "poison"
        }

        fn display_name(&self) -> &str {
            "Poison"
        }

        fn operators(&self) -> &[Operator] {
            &self.operators
        }

        fn inputs_for(&self, operator_id: &str) -> crate::error::Result<&[InputDescriptor]> {
            crate::conditionlet::ensure_operator("poison", &self.operators, operator_id)?;
            Ok(&self.inputs)
        }

        fn evaluate(
            &self,
            _operator_id: &str,
            _parameters: &ParameterValues,
            _context: &EvaluationContext,
        ) -> crate::error::Result<bool> {
            Err(RuntimeError::InvalidParameter {
                field: "value".to_string(),
                reason: "poison conditionlet was evaluated".to_string(),
            })
        }
    }

    fn sealed_registry() -> ConditionletRegistry {
        let mut registry = ConditionletRegistry::new();
        for conditionlet in builtins() {
            registry.register(conditionlet).unwrap();
        }
        registry.register(Arc::new(PoisonConditionlet::new())).unwrap();
        registry.seal();
        registry
    }

    fn promo_condition() -> RuleExpression {
        RuleExpression::condition(
            ConditionLeaf::new("visitedUrl", op::CONTAINS).with_parameter("urlFragment", "/promo"),
        )
    }

    fn poison_condition() -> RuleExpression {
        RuleExpression::condition(ConditionLeaf::new("poison", op::IS))
    }

    #[test]
    fn test_unsealed_registry_is_rejected() {
        let registry = ConditionletRegistry::new();
        assert!(matches!(
            RuleEvaluator::new(&registry).unwrap_err(),
            RuntimeError::RegistryNotSealed
        ));
    }

    #[test]
    fn test_leaf_match_and_miss() {
        let registry = sealed_registry();
        let evaluator = RuleEvaluator::new(&registry).unwrap();

        let promo = EvaluationContext::new().with_path("/promo/page1");
        assert!(evaluator.evaluate(&promo_condition(), &promo).unwrap());

        let other = EvaluationContext::new().with_path("/other");
        assert!(!evaluator.evaluate(&promo_condition(), &other).unwrap());
    }

    #[test]
    fn test_and_group_short_circuits() {
        let registry = sealed_registry();
        let evaluator = RuleEvaluator::new(&registry).unwrap();

        // First child is false: the poison leaf must never be evaluated
        let expression = RuleExpression::all(vec![promo_condition(), poison_condition()]);
        let context = EvaluationContext::new().with_path("/other");

        assert!(!evaluator.evaluate(&expression, &context).unwrap());
    }

    #[test]
    fn test_or_group_short_circuits() {
        let registry = sealed_registry();
        let evaluator = RuleEvaluator::new(&registry).unwrap();

        // First child is true: the poison leaf must never be evaluated
        let expression = RuleExpression::any(vec![promo_condition(), poison_condition()]);
        let context = EvaluationContext::new().with_path("/promo/page1");

        assert!(evaluator.evaluate(&expression, &context).unwrap());
    }

    #[test]
    fn test_poison_error_propagates_when_reached() {
        let registry = sealed_registry();
        let evaluator = RuleEvaluator::new(&registry).unwrap();

        let expression = RuleExpression::any(vec![promo_condition(), poison_condition()]);
        let context = EvaluationContext::new().with_path("/other");

        let error = evaluator.evaluate(&expression, &context).unwrap_err();
        assert!(matches!(error, RuntimeError::InvalidParameter { .. }));
    }

    #[test]
    fn test_empty_groups_are_vacuous() {
        let registry = sealed_registry();
        let evaluator = RuleEvaluator::new(&registry).unwrap();
        let context = EvaluationContext::new();

        assert!(evaluator.evaluate(&RuleExpression::all(vec![]), &context).unwrap());
        assert!(!evaluator.evaluate(&RuleExpression::any(vec![]), &context).unwrap());
    }

    #[test]
    fn test_negation_inverts_result() {
        let registry = sealed_registry();
        let evaluator = RuleEvaluator::new(&registry).unwrap();

        let negated = RuleExpression::condition(
            ConditionLeaf::new("visitedUrl", op::CONTAINS)
                .with_parameter("urlFragment", "/promo")
                .negated(),
        );

        let promo = EvaluationContext::new().with_path("/promo/page1");
        assert!(!evaluator.evaluate(&negated, &promo).unwrap());

        let other = EvaluationContext::new().with_path("/other");
        assert!(evaluator.evaluate(&negated, &other).unwrap());
    }

    #[test]
    fn test_negation_on_missing_fact() {
        let registry = sealed_registry();
        let evaluator = RuleEvaluator::new(&registry).unwrap();

        // No request.path fact at all: the leaf is false, negation makes it true
        let negated = RuleExpression::condition(
            ConditionLeaf::new("visitedUrl", op::CONTAINS)
                .with_parameter("urlFragment", "/promo")
                .negated(),
        );
        assert!(evaluator.evaluate(&negated, &EvaluationContext::new()).unwrap());
    }

    #[test]
    fn test_unknown_conditionlet_aborts_evaluation() {
        let registry = sealed_registry();
        let evaluator = RuleEvaluator::new(&registry).unwrap();

        let expression =
            RuleExpression::condition(ConditionLeaf::new("doesNotExist", op::IS));
        let error = evaluator
            .evaluate(&expression, &EvaluationContext::new())
            .unwrap_err();
        assert!(matches!(error, RuntimeError::ConditionletNotFound(_)));
    }

    #[test]
    fn test_unknown_operator_aborts_evaluation() {
        let registry = sealed_registry();
        let evaluator = RuleEvaluator::new(&registry).unwrap();

        let expression =
            RuleExpression::condition(ConditionLeaf::new("visitedUrl", op::BETWEEN));
        let error = evaluator
            .evaluate(&expression, &EvaluationContext::new())
            .unwrap_err();
        assert!(matches!(error, RuntimeError::UnknownOperator { .. }));
    }

    #[test]
    fn test_missing_required_input_aborts_evaluation() {
        let registry = sealed_registry();
        let evaluator = RuleEvaluator::new(&registry).unwrap();

        let expression =
            RuleExpression::condition(ConditionLeaf::new("visitedUrl", op::CONTAINS));
        let error = evaluator
            .evaluate(&expression, &EvaluationContext::new().with_path("/promo"))
            .unwrap_err();
        assert!(matches!(
            error,
            RuntimeError::Validation(ValidationError::MissingRequiredInput { field })
                if field == "urlFragment"
        ));
    }

    #[test]
    fn test_nested_tree_evaluation() {
        let registry = sealed_registry();
        let evaluator = RuleEvaluator::new(&registry).unwrap();

        // promo page AND (US visitor OR CA visitor)
        let expression = RuleExpression::all(vec![
            promo_condition(),
            RuleExpression::any(vec![
                RuleExpression::condition(
                    ConditionLeaf::new("usersCountry", op::IS).with_parameter("countryCode", "US"),
                ),
                RuleExpression::condition(
                    ConditionLeaf::new("usersCountry", op::IS).with_parameter("countryCode", "CA"),
                ),
            ]),
        ]);

        let matching = EvaluationContext::new().with_path("/promo/sale").with_country("CA");
        assert!(evaluator.evaluate(&expression, &matching).unwrap());

        let wrong_country = EvaluationContext::new().with_path("/promo/sale").with_country("BR");
        assert!(!evaluator.evaluate(&expression, &wrong_country).unwrap());
    }
}
