//! Targeting engine
//!
//! The engine owns a sealed conditionlet registry and exposes the four
//! operations a presentation layer consumes: enumerating conditionlets,
//! their comparisons, and the inputs a comparison requires, plus evaluating
//! a rule expression against one request's facts.
//!
//! The enumeration operations deliberately return empty collections for
//! unknown ids; existing facade clients treat that as an empty successful
//! response. Evaluation has no such leniency: a malformed rule fails.

use crate::error::Result;
use cohort_core::{validate_parameters, ConditionLeaf, InputDescriptor, RuleExpression};
use cohort_runtime::{ConditionletRegistry, EvaluationContext, RuleEvaluator};
use serde::{Deserialize, Serialize};

/// One conditionlet, as rendered by enumeration surfaces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionletSummary {
    /// Registry id
    pub id: String,
    /// Human-readable name
    pub display_name: String,
}

/// One comparison operator, as rendered by enumeration surfaces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Operator id within its conditionlet
    pub id: String,
    /// Display label
    pub label: String,
}

/// Facade over a sealed conditionlet registry
#[derive(Debug)]
pub struct TargetingEngine {
    registry: ConditionletRegistry,
}

impl TargetingEngine {
    /// Create an engine over a registry, sealing it.
    ///
    /// Sealing here means every engine hands out read-only access only;
    /// conditionlet registration is over once an engine exists.
    pub fn new(mut registry: ConditionletRegistry) -> Self {
        registry.seal();
        Self { registry }
    }

    /// The sealed registry backing this engine
    pub fn registry(&self) -> &ConditionletRegistry {
        &self.registry
    }

    /// Enumerate all conditionlets, in stable ascending id order
    pub fn list_conditionlets(&self) -> Vec<ConditionletSummary> {
        self.registry
            .list_all()
            .map(|conditionlet| ConditionletSummary {
                id: conditionlet.id().to_string(),
                display_name: conditionlet.display_name().to_string(),
            })
            .collect()
    }

    /// Enumerate the comparisons a conditionlet supports.
    ///
    /// Unknown ids yield an empty collection, not an error.
    pub fn list_comparisons(&self, conditionlet_id: &str) -> Vec<ComparisonSummary> {
        match self.registry.get(conditionlet_id) {
            Some(conditionlet) => conditionlet
                .operators()
                .iter()
                .map(|operator| ComparisonSummary {
                    id: operator.id.clone(),
                    label: operator.label.clone(),
                })
                .collect(),
            None => {
                tracing::debug!(
                    "Unknown conditionlet '{}', returning no comparisons",
                    conditionlet_id
                );
                Vec::new()
            }
        }
    }

    /// Enumerate the ordered inputs a comparison requires.
    ///
    /// Unknown conditionlet or operator ids yield an empty sequence.
    pub fn list_inputs(&self, conditionlet_id: &str, operator_id: &str) -> Vec<InputDescriptor> {
        self.registry
            .get(conditionlet_id)
            .and_then(|conditionlet| conditionlet.inputs_for(operator_id).ok())
            .map(<[InputDescriptor]>::to_vec)
            .unwrap_or_default()
    }

    /// Validate one condition leaf without evaluating it.
    ///
    /// Resolves the conditionlet and operator and runs parameter validation;
    /// useful to rule-editing surfaces that check definitions before saving.
    pub fn validate_condition(&self, leaf: &ConditionLeaf) -> Result<()> {
        let conditionlet = self.registry.find(&leaf.conditionlet)?;
        let inputs = conditionlet.inputs_for(&leaf.operator)?;
        validate_parameters(inputs, &leaf.parameters)?;
        Ok(())
    }

    /// Evaluate a rule expression against one request's facts
    pub fn evaluate_rule(
        &self,
        expression: &RuleExpression,
        context: &EvaluationContext,
    ) -> Result<bool> {
        let evaluator = RuleEvaluator::new(&self.registry)?;
        Ok(evaluator.evaluate(expression, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TargetingEngineBuilder;
    use cohort_core::op;

    fn engine() -> TargetingEngine {
        TargetingEngineBuilder::new().with_builtins().build().unwrap()
    }

    #[test]
    fn test_new_seals_the_registry() {
        let engine = TargetingEngine::new(ConditionletRegistry::new());
        assert!(engine.registry().is_sealed());
    }

    #[test]
    fn test_list_conditionlets_is_id_ordered() {
        let ids: Vec<String> = engine()
            .list_conditionlets()
            .into_iter()
            .map(|summary| summary.id)
            .collect();

        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert!(ids.contains(&"visitedUrl".to_string()));
    }

    #[test]
    fn test_list_comparisons_known_id() {
        let comparisons = engine().list_comparisons("visitedUrl");
        assert!(comparisons.iter().any(|c| c.id == op::CONTAINS));
        assert!(comparisons.iter().all(|c| !c.label.is_empty()));
    }

    #[test]
    fn test_list_comparisons_unknown_id_is_empty() {
        assert!(engine().list_comparisons("doesNotExist").is_empty());
    }

    #[test]
    fn test_list_inputs_known_pair() {
        let inputs = engine().list_inputs("visitedUrl", op::CONTAINS);
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].name, "urlFragment");
    }

    #[test]
    fn test_list_inputs_unknown_ids_are_empty() {
        let engine = engine();
        assert!(engine.list_inputs("doesNotExist", op::CONTAINS).is_empty());
        assert!(engine.list_inputs("visitedUrl", "no-such-operator").is_empty());
    }

    #[test]
    fn test_summary_serialization() {
        let summaries = engine().list_conditionlets();
        let json = serde_json::to_string(&summaries).unwrap();
        assert!(json.contains("\"visitedUrl\""));
        assert!(json.contains("\"Visited URL\""));
    }

    #[test]
    fn test_validate_condition() {
        let engine = engine();

        let valid = ConditionLeaf::new("visitedUrl", op::CONTAINS)
            .with_parameter("urlFragment", "/promo");
        assert!(engine.validate_condition(&valid).is_ok());

        let missing = ConditionLeaf::new("visitedUrl", op::CONTAINS);
        assert!(engine.validate_condition(&missing).is_err());

        let unknown = ConditionLeaf::new("doesNotExist", op::IS);
        assert!(engine.validate_condition(&unknown).is_err());
    }
}
