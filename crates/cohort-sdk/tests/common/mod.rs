//! Shared test helpers

use cohort_sdk::{TargetingEngine, TargetingEngineBuilder};

/// Build an engine carrying every built-in conditionlet
pub fn engine_with_builtins() -> TargetingEngine {
    TargetingEngineBuilder::new()
        .with_builtins()
        .build()
        .expect("built-in conditionlets register cleanly")
}
