//! Conditionlet contract and built-in condition types
//!
//! A conditionlet is a named, pluggable condition implementation. Each one
//! declares the comparison operators it supports and, per operator, the
//! ordered input descriptors a caller must satisfy; `evaluate` then reads a
//! fact from the evaluation context and applies the chosen comparison.
//! Implementations are stateless and shared across concurrent evaluations.

mod compare;
mod date_time;
mod request_header;
mod session_attribute;
mod users_country;
mod visited_url;

pub use date_time::DateTimeConditionlet;
pub use request_header::RequestHeaderConditionlet;
pub use session_attribute::SessionAttributeConditionlet;
pub use users_country::UsersCountryConditionlet;
pub use visited_url::VisitedUrlConditionlet;

use crate::context::EvaluationContext;
use crate::error::{Result, RuntimeError};
use cohort_core::{InputDescriptor, Operator, ParameterValues, Value};
use std::fmt;
use std::sync::Arc;

/// A pluggable condition type, evaluable against request facts.
///
/// Implementations must be side-effect free: `evaluate` never mutates the
/// context, the parameters, or shared state, so one instance is safe to
/// invoke from any number of concurrent evaluations.
pub trait Conditionlet: Send + Sync {
    /// Stable identifier, unique within a registry
    fn id(&self) -> &str;

    /// Human-readable name shown by enumeration surfaces
    fn display_name(&self) -> &str;

    /// The comparison operators this conditionlet supports, fixed at construction
    fn operators(&self) -> &[Operator];

    /// Ordered input descriptors the given comparison requires
    fn inputs_for(&self, operator_id: &str) -> Result<&[InputDescriptor]>;

    /// Evaluate one comparison against the request facts.
    ///
    /// Parameters are expected to have passed validation against
    /// `inputs_for(operator_id)`; values that still turn out unusable fail
    /// with `InvalidParameter` naming the offending field. A fact that is
    /// absent or of an unexpected shape is an ordinary non-match, never an
    /// error.
    fn evaluate(
        &self,
        operator_id: &str,
        parameters: &ParameterValues,
        context: &EvaluationContext,
    ) -> Result<bool>;
}

impl fmt::Debug for dyn Conditionlet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conditionlet")
            .field("id", &self.id())
            .finish()
    }
}

/// One shared instance of every built-in conditionlet
pub fn builtins() -> Vec<Arc<dyn Conditionlet>> {
    vec![
        Arc::new(DateTimeConditionlet::new()),
        Arc::new(RequestHeaderConditionlet::new()),
        Arc::new(SessionAttributeConditionlet::new()),
        Arc::new(UsersCountryConditionlet::new()),
        Arc::new(VisitedUrlConditionlet::new()),
    ]
}

/// Reject operators outside the declared set
pub(crate) fn ensure_operator(
    conditionlet_id: &str,
    operators: &[Operator],
    operator_id: &str,
) -> Result<()> {
    if operators.iter().any(|operator| operator.id == operator_id) {
        Ok(())
    } else {
        Err(RuntimeError::UnknownOperator {
            conditionlet: conditionlet_id.to_string(),
            operator: operator_id.to_string(),
        })
    }
}

/// Fetch a parameter that must be present as text by the time evaluate runs
pub(crate) fn required_text<'a>(parameters: &'a ParameterValues, field: &str) -> Result<&'a str> {
    parameters
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| RuntimeError::InvalidParameter {
            field: field.to_string(),
            reason: "expected a text value".to_string(),
        })
}
