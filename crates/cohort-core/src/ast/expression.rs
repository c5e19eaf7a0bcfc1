//! Rule expression tree
//!
//! A `RuleExpression` is a finite boolean tree: condition leaves referencing
//! a conditionlet, operator, and parameter values, combined by AND/OR group
//! nodes. Trees are built per rule definition, validated once, and immutable
//! afterwards.

use crate::types::ParameterValues;
use serde::{Deserialize, Serialize};

/// Rule expression node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleExpression {
    /// Every child must match; an empty group is vacuously true
    All(Vec<RuleExpression>),

    /// At least one child must match; an empty group is vacuously false
    Any(Vec<RuleExpression>),

    /// A single conditionlet bound to an operator and parameter values
    Condition(ConditionLeaf),
}

/// A conditionlet reference with its bound operator and parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionLeaf {
    /// Registry id of the conditionlet to evaluate
    pub conditionlet: String,

    /// Operator id within that conditionlet
    pub operator: String,

    /// Submitted parameter values for the operator's inputs
    #[serde(default)]
    pub parameters: ParameterValues,

    /// Invert the leaf's boolean result
    #[serde(default)]
    pub negate: bool,
}

impl RuleExpression {
    /// Create an AND group
    pub fn all(children: Vec<RuleExpression>) -> Self {
        RuleExpression::All(children)
    }

    /// Create an OR group
    pub fn any(children: Vec<RuleExpression>) -> Self {
        RuleExpression::Any(children)
    }

    /// Create a condition leaf
    pub fn condition(leaf: ConditionLeaf) -> Self {
        RuleExpression::Condition(leaf)
    }
}

impl ConditionLeaf {
    /// Create a leaf referencing a conditionlet and one of its operators
    pub fn new(conditionlet: impl Into<String>, operator: impl Into<String>) -> Self {
        Self {
            conditionlet: conditionlet.into(),
            operator: operator.into(),
            parameters: ParameterValues::new(),
            negate: false,
        }
    }

    /// Builder method to bind a parameter value
    pub fn with_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<crate::types::Value>,
    ) -> Self {
        self.parameters.insert(name, value);
        self
    }

    /// Builder method to set the negation flag
    pub fn negated(mut self) -> Self {
        self.negate = true;
        self
    }
}
