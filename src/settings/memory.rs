//! In-memory settings store.

use std::collections::HashMap;

use tracing::{debug, instrument};

use super::{SettingsStore, StoreError};

/// Settings store backed by a `HashMap`, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<(String, String), String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, namespace: &str, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .entries
            .get(&(namespace.to_string(), key.to_string()))
            .cloned())
    }

    #[instrument(skip(self))]
    fn set(&mut self, namespace: &str, key: &str, value: &str) -> Result<(), StoreError> {
        debug!("Writing setting");
        self.entries
            .insert((namespace.to_string(), key.to_string()), value.to_string());
        Ok(())
    }
}
