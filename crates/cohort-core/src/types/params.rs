//! Submitted parameter values
//!
//! `ParameterValues` maps input names to the values a caller submitted for
//! one condition. Instances are immutable once validated; the validator
//! returns a new, fully-bound map.

use super::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from input name to submitted value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterValues {
    values: HashMap<String, Value>,
}

impl ParameterValues {
    /// Create an empty parameter map
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add a parameter
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a parameter value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up a submitted value by input name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether a value was submitted for the input name
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterate over the submitted input names
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of submitted parameters
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no parameters were submitted
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_lookup() {
        let params = ParameterValues::new()
            .with("headerName", "Accept-Language")
            .with("headerValue", "en-US");

        assert_eq!(params.len(), 2);
        assert_eq!(
            params.get("headerName"),
            Some(&Value::String("Accept-Language".to_string()))
        );
        assert!(params.contains("headerValue"));
        assert!(params.get("missing").is_none());
    }

    #[test]
    fn test_empty() {
        let params = ParameterValues::new();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
    }

    #[test]
    fn test_serde_transparent() {
        let params = ParameterValues::new().with("urlFragment", "/promo");
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"urlFragment":"/promo"}"#);

        let deserialized: ParameterValues = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, params);
    }
}
