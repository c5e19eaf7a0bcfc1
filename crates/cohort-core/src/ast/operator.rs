//! Comparison operators
//!
//! An `Operator` is identity plus display label only. Comparison semantics
//! live in the conditionlet that owns the operator: the same id (say, "is")
//! means a different low-level comparison depending on the fact's type.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Well-known operator ids shared by the built-in conditionlets
pub mod op {
    /// Exact match
    pub const IS: &str = "is";
    /// Exact mismatch
    pub const IS_NOT: &str = "is-not";
    /// The fact is present, whatever its value
    pub const EXISTS: &str = "exists";
    /// Substring match
    pub const CONTAINS: &str = "contains";
    /// Prefix match
    pub const STARTS_WITH: &str = "starts-with";
    /// Suffix match
    pub const ENDS_WITH: &str = "ends-with";
    /// Regular expression match
    pub const MATCHES_REGEX: &str = "matches-regex";
    /// Membership in a submitted list
    pub const ONE_OF: &str = "one-of";
    /// Instant strictly before the submitted one
    pub const BEFORE: &str = "before";
    /// Instant strictly after the submitted one
    pub const AFTER: &str = "after";
    /// Instant within submitted inclusive bounds
    pub const BETWEEN: &str = "between";
}

/// A named comparison a conditionlet supports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operator {
    /// Stable identifier, unique within the owning conditionlet
    pub id: String,
    /// Display text; never used for identity
    pub label: String,
}

impl Operator {
    /// Create an operator
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

// Identity is the id alone; labels are mutable display text.
impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Operator {}

impl Hash for Operator {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
