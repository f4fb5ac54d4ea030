//! Namespaced key-value settings store.

use serde::de::DeserializeOwned;
use tracing::{instrument, warn};

use super::StoreError;

/// A flat key-value store partitioned into namespaces.
///
/// Values are stored as text. The typed helpers encode values as JSON,
/// and read back the supplied default when a key is absent, unreadable,
/// or holds something that does not parse.
pub trait SettingsStore {
    /// Reads the raw value stored under `namespace`/`key`.
    fn get(&self, namespace: &str, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes the raw value stored under `namespace`/`key`.
    fn set(&mut self, namespace: &str, key: &str, value: &str) -> Result<(), StoreError>;

    /// Replaces the value under `namespace`/`key` with `next(current)` and
    /// returns what was written.
    ///
    /// A failed read aborts the update. This default reads then writes;
    /// stores shared between connections override it with a transaction.
    fn update(
        &mut self,
        namespace: &str,
        key: &str,
        next: &mut dyn FnMut(Option<&str>) -> Result<String, StoreError>,
    ) -> Result<String, StoreError> {
        let current = self.get(namespace, key)?;
        let value = next(current.as_deref())?;
        self.set(namespace, key, &value)?;
        Ok(value)
    }

    /// Whether a value has ever been written under `namespace`/`key`.
    fn contains(&self, namespace: &str, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(namespace, key)?.is_some())
    }

    /// Reads a boolean, falling back to `default`.
    fn get_bool(&self, namespace: &str, key: &str, default: bool) -> bool {
        decode(self.get(namespace, key), namespace, key).unwrap_or(default)
    }

    /// Writes a boolean.
    fn set_bool(&mut self, namespace: &str, key: &str, value: bool) -> Result<(), StoreError> {
        self.set(namespace, key, &serde_json::to_string(&value)?)
    }

    /// Reads a non-negative integer, falling back to `default`.
    fn get_u32(&self, namespace: &str, key: &str, default: u32) -> u32 {
        decode(self.get(namespace, key), namespace, key).unwrap_or(default)
    }

    /// Writes a non-negative integer.
    fn set_u32(&mut self, namespace: &str, key: &str, value: u32) -> Result<(), StoreError> {
        self.set(namespace, key, &serde_json::to_string(&value)?)
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for Box<S> {
    fn get(&self, namespace: &str, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(namespace, key)
    }

    fn set(&mut self, namespace: &str, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(namespace, key, value)
    }

    fn update(
        &mut self,
        namespace: &str,
        key: &str,
        next: &mut dyn FnMut(Option<&str>) -> Result<String, StoreError>,
    ) -> Result<String, StoreError> {
        (**self).update(namespace, key, next)
    }
}

/// Decodes a raw read, logging anything that has to fall back.
#[instrument(skip(raw))]
fn decode<T: DeserializeOwned>(
    raw: Result<Option<String>, StoreError>,
    namespace: &str,
    key: &str,
) -> Option<T> {
    match raw {
        Ok(Some(text)) => match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(error = %e, value = %text, "Stored value does not parse, using default");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!(error = %e, "Failed to read setting, using default");
            None
        }
    }
}
