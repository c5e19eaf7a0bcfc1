//! Cohort runtime
//!
//! Executes rule expressions against request facts: the conditionlet
//! contract and built-in conditionlets, the sealed registry, the evaluation
//! context, and the short-circuiting rule evaluator.

pub mod conditionlet;
pub mod context;
pub mod engine;
pub mod error;
pub mod registry;

// Re-export main types
pub use conditionlet::{builtins, Conditionlet};
pub use context::{fact, EvaluationContext};
pub use engine::RuleEvaluator;
pub use error::{Result, RuntimeError};
pub use registry::ConditionletRegistry;

// Re-export commonly used types from the core crate
pub use cohort_core::{ConditionLeaf, InputDescriptor, Operator, ParameterValues, RuleExpression, Value};
