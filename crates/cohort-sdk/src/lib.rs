//! Cohort targeting engine SDK
//!
//! High-level API for building a targeting engine and serving the
//! enumeration and evaluation operations a presentation layer consumes.

pub mod builder;
pub mod engine;
pub mod error;

// Re-export main types
pub use builder::TargetingEngineBuilder;
pub use engine::{ComparisonSummary, ConditionletSummary, TargetingEngine};
pub use error::{Result, SdkError};

// Re-export commonly used types from dependencies
pub use cohort_core::{
    ConditionLeaf, InputDescriptor, InputType, Operator, ParameterValues, RuleExpression, Value,
};
pub use cohort_runtime::{fact, Conditionlet, EvaluationContext};
