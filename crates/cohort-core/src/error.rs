//! Parameter validation errors

use thiserror::Error;

/// Errors raised while validating submitted parameter values against an
/// operator's declared input descriptors.
///
/// Validation is fail-fast: the first violation in descriptor order is
/// reported, so callers see a deterministic error for a given submission.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required input has no submitted value and no default
    #[error("Missing required input: {field}")]
    MissingRequiredInput { field: String },

    /// The submitted value cannot be coerced to the declared input type
    #[error("Type mismatch for input '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    /// The coerced value violates the descriptor's allowed values or pattern
    #[error("Constraint violation for input '{field}': {reason}")]
    ConstraintViolation { field: String, reason: String },

    /// A submitted key is not named by any input descriptor
    #[error("Unknown parameter: {field}")]
    UnknownParameter { field: String },
}

/// Result type for validation operations
pub type Result<T> = std::result::Result<T, ValidationError>;
