//! Input descriptors
//!
//! An `InputDescriptor` declares one parameter a comparison requires:
//! its name, value type, constraints, and optional default. The ordered
//! descriptor list of an operator is the positional binding contract a
//! presentation layer renders form fields from.

use super::value::Value;
use serde::{Deserialize, Serialize};

/// Declared value type of an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Free-form text
    Text,
    /// Numeric value; numeric strings coerce
    Numeric,
    /// Boolean value; "true"/"false" strings coerce
    Boolean,
    /// One value out of a declared set
    Enumeration,
}

impl InputType {
    /// Name of this type, for error messages
    pub fn name(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Numeric => "numeric",
            InputType::Boolean => "boolean",
            InputType::Enumeration => "enumeration",
        }
    }
}

/// One declared parameter of a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDescriptor {
    /// Parameter name, unique within the operator's input list
    pub name: String,

    /// Declared value type
    pub input_type: InputType,

    /// Whether a value must be submitted (or defaulted)
    #[serde(default)]
    pub required: bool,

    /// Closed set of accepted values, when non-empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<String>,

    /// Regular expression the submitted text must match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Value substituted when the parameter is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl InputDescriptor {
    /// Create a descriptor with the given name and type
    pub fn new(name: impl Into<String>, input_type: InputType) -> Self {
        Self {
            name: name.into(),
            input_type,
            required: false,
            allowed_values: Vec::new(),
            pattern: None,
            default: None,
        }
    }

    /// Create a text descriptor
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, InputType::Text)
    }

    /// Create a numeric descriptor
    pub fn numeric(name: impl Into<String>) -> Self {
        Self::new(name, InputType::Numeric)
    }

    /// Create a boolean descriptor
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, InputType::Boolean)
    }

    /// Create an enumeration descriptor over the given values
    pub fn enumeration<I, S>(name: impl Into<String>, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut descriptor = Self::new(name, InputType::Enumeration);
        descriptor.allowed_values = allowed.into_iter().map(Into::into).collect();
        descriptor
    }

    /// Mark this input as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Constrain submitted text to the given regular expression
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set the value substituted when the parameter is absent
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}
