//! Evaluation context
//!
//! An `EvaluationContext` is a read-only snapshot of request-scoped facts,
//! keyed by a fixed vocabulary. It lives for one evaluation pass and is
//! never mutated by a conditionlet; a missing fact is not an error, it is
//! simply a fact that will not match.

use chrono::{DateTime, Utc};
use cohort_core::Value;
use std::collections::HashMap;

/// Fixed fact key vocabulary
pub mod fact {
    /// Path of the current request
    pub const REQUEST_PATH: &str = "request.path";
    /// Country resolved from the request's client address (ISO 3166 alpha-2)
    pub const GEO_COUNTRY: &str = "geo.country";
    /// Wall-clock instant of the evaluation, RFC 3339
    pub const TIME_NOW: &str = "time.now";
    /// Prefix for request header facts; header names are lowercased
    pub const REQUEST_HEADER_PREFIX: &str = "request.header.";
    /// Prefix for session attribute facts
    pub const SESSION_ATTR_PREFIX: &str = "session.attr.";
}

/// Read-only bag of request-scoped facts
#[derive(Debug, Clone, Default)]
pub struct EvaluationContext {
    facts: HashMap<String, Value>,
}

impl EvaluationContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add an arbitrary fact
    pub fn with_fact(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.facts.insert(key.into(), value.into());
        self
    }

    /// Builder method to add a request header fact
    ///
    /// Header names are case-insensitive on the wire, so they are stored
    /// lowercased under `request.header.<name>`.
    pub fn with_header(self, name: &str, value: impl Into<Value>) -> Self {
        let key = format!("{}{}", fact::REQUEST_HEADER_PREFIX, name.to_lowercase());
        self.with_fact(key, value)
    }

    /// Builder method to add a session attribute fact
    pub fn with_session_attr(self, name: &str, value: impl Into<Value>) -> Self {
        let key = format!("{}{}", fact::SESSION_ATTR_PREFIX, name);
        self.with_fact(key, value)
    }

    /// Builder method to set the request path
    pub fn with_path(self, path: impl Into<Value>) -> Self {
        self.with_fact(fact::REQUEST_PATH, path)
    }

    /// Builder method to set the resolved country
    pub fn with_country(self, country: impl Into<Value>) -> Self {
        self.with_fact(fact::GEO_COUNTRY, country)
    }

    /// Builder method to set the evaluation instant
    pub fn with_clock(self, instant: DateTime<Utc>) -> Self {
        self.with_fact(fact::TIME_NOW, instant.to_rfc3339())
    }

    /// Look up a fact by key
    pub fn fact(&self, key: &str) -> Option<&Value> {
        self.facts.get(key)
    }

    /// Look up a request header fact by name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&Value> {
        self.facts
            .get(&format!("{}{}", fact::REQUEST_HEADER_PREFIX, name.to_lowercase()))
    }

    /// Look up a session attribute fact by name
    pub fn session_attr(&self, name: &str) -> Option<&Value> {
        self.facts
            .get(&format!("{}{}", fact::SESSION_ATTR_PREFIX, name))
    }

    /// Number of facts in the snapshot
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Whether the snapshot holds no facts
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}
