//! Settings store error type.

use derive_more::{Display, Error};
use tracing::instrument;

/// What a failed store operation was touching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Display)]
pub enum ErrorScope {
    /// The store as a whole (opening, migrating).
    #[default]
    #[display("store")]
    Store,
    /// A single setting.
    #[display("{}/{}", namespace, key)]
    Setting {
        /// Namespace of the setting.
        namespace: String,
        /// Key of the setting.
        key: String,
    },
}

/// Settings store error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings store error ({}): {} at {}:{}", scope, message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Setting being accessed, if any.
    pub scope: ErrorScope,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            scope: ErrorScope::Store,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Attaches the setting being read or written.
    pub fn with_setting(mut self, namespace: &str, key: &str) -> Self {
        self.scope = ErrorScope::Setting {
            namespace: namespace.to_string(),
            key: key.to_string(),
        };
        self
    }
}

impl From<diesel::result::Error> for StoreError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        Self::new(format!("Query failed: {}", err))
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Value encoding failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_defaults_to_store() {
        let err = StoreError::new("migration failed");
        assert_eq!(err.scope, ErrorScope::Store);
        assert!(err.to_string().starts_with("Settings store error (store): migration failed at"));
    }

    #[test]
    fn test_setting_scope_in_message() {
        let err = StoreError::new("locked").with_setting("stats", "xWins");
        assert!(err.to_string().contains("(stats/xWins): locked"));
        assert!(err.file.ends_with("error.rs"));
    }
}
