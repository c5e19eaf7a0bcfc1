//! Core types for the Cohort targeting engine
//!
//! Data model shared by the runtime and SDK: runtime values, comparison
//! operators, input descriptors, parameter validation, and the rule
//! expression tree.

pub mod ast;
pub mod error;
pub mod types;

pub use ast::{op, ConditionLeaf, Operator, RuleExpression};
pub use error::ValidationError;
pub use types::validator::validate_parameters;
pub use types::{InputDescriptor, InputType, ParameterValues, Value};
