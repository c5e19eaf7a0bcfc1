//! Conditionlet registry
//!
//! All known conditionlets are registered during process initialization,
//! then the registry is sealed. A sealed registry never changes, so any
//! number of concurrent readers can share it without locking.

use crate::conditionlet::Conditionlet;
use crate::error::{Result, RuntimeError};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Registry of conditionlets, indexed by stable id
pub struct ConditionletRegistry {
    // BTreeMap keeps enumeration in ascending id order, deterministically
    entries: BTreeMap<String, Arc<dyn Conditionlet>>,
    sealed: bool,
}

impl ConditionletRegistry {
    /// Create an empty, unsealed registry
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            sealed: false,
        }
    }

    /// Register a conditionlet under its id.
    ///
    /// Fails if the registry is sealed or the id is already taken.
    pub fn register(&mut self, conditionlet: Arc<dyn Conditionlet>) -> Result<()> {
        let id = conditionlet.id().to_string();
        if self.sealed {
            return Err(RuntimeError::RegistrySealed(id));
        }
        if self.entries.contains_key(&id) {
            return Err(RuntimeError::DuplicateConditionlet(id));
        }
        tracing::debug!("Registered conditionlet '{}'", id);
        self.entries.insert(id, conditionlet);
        Ok(())
    }

    /// Seal the registry; registration is rejected afterwards. Idempotent.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    /// Whether the registry has been sealed
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Look up a conditionlet, failing if the id is unknown
    pub fn find(&self, id: &str) -> Result<&Arc<dyn Conditionlet>> {
        self.entries
            .get(id)
            .ok_or_else(|| RuntimeError::ConditionletNotFound(id.to_string()))
    }

    /// Look up a conditionlet without failing, for enumeration surfaces
    pub fn get(&self, id: &str) -> Option<&Arc<dyn Conditionlet>> {
        self.entries.get(id)
    }

    /// Iterate over all conditionlets in ascending id order
    pub fn list_all(&self) -> impl Iterator<Item = &Arc<dyn Conditionlet>> {
        self.entries.values()
    }

    /// Number of registered conditionlets
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ConditionletRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConditionletRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionletRegistry")
            .field("ids", &self.entries.keys().collect::<Vec<_>>())
            .field("sealed", &self.sealed)
            .finish()
    }
}
