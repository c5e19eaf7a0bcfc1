//! Builder pattern for TargetingEngine

use crate::engine::TargetingEngine;
use crate::error::Result;
use cohort_runtime::{builtins, Conditionlet, ConditionletRegistry};
use std::sync::Arc;

/// Builder for TargetingEngine
///
/// # Example
///
/// ```rust
/// use cohort_sdk::TargetingEngineBuilder;
///
/// let engine = TargetingEngineBuilder::new()
///     .with_builtins()
///     .build()
///     .expect("built-in conditionlets register cleanly");
///
/// assert!(!engine.list_conditionlets().is_empty());
/// ```
pub struct TargetingEngineBuilder {
    conditionlets: Vec<Arc<dyn Conditionlet>>,
}

impl TargetingEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            conditionlets: Vec::new(),
        }
    }

    /// Add every built-in conditionlet
    pub fn with_builtins(mut self) -> Self {
        self.conditionlets.extend(builtins());
        self
    }

    /// Add a host-provided conditionlet
    pub fn with_conditionlet(mut self, conditionlet: Arc<dyn Conditionlet>) -> Self {
        self.conditionlets.push(conditionlet);
        self
    }

    /// Register everything, seal the registry, and return the engine.
    ///
    /// Fails on duplicate conditionlet ids; nothing is evaluable until this
    /// completes, which is the startup barrier the registry's seal requires.
    pub fn build(self) -> Result<TargetingEngine> {
        let mut registry = ConditionletRegistry::new();
        for conditionlet in self.conditionlets {
            registry.register(conditionlet)?;
        }
        Ok(TargetingEngine::new(registry))
    }
}

impl Default for TargetingEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
