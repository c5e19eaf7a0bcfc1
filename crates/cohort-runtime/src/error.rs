//! Runtime error types

use cohort_core::ValidationError;
use thiserror::Error;

/// Runtime error
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// No conditionlet registered under the id
    #[error("Conditionlet not found: {0}")]
    ConditionletNotFound(String),

    /// A conditionlet with the id is already registered
    #[error("Conditionlet already registered: {0}")]
    DuplicateConditionlet(String),

    /// Registration attempted after the registry was sealed
    #[error("Registry is sealed; cannot register conditionlet: {0}")]
    RegistrySealed(String),

    /// Evaluation attempted before the registry was sealed
    #[error("Registry must be sealed before evaluation")]
    RegistryNotSealed,

    /// The operator is not supported by the conditionlet
    #[error("Operator '{operator}' is not supported by conditionlet '{conditionlet}'")]
    UnknownOperator {
        conditionlet: String,
        operator: String,
    },

    /// A parameter value turned out unusable inside evaluate
    #[error("Invalid parameter '{field}': {reason}")]
    InvalidParameter { field: String, reason: String },

    /// Parameter validation failed before evaluation
    #[error("Parameter validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
