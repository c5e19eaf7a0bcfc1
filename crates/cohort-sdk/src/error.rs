//! SDK error types

use cohort_core::ValidationError;
use cohort_runtime::RuntimeError;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Runtime error
    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),

    /// Parameter validation error
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
