//! Persisted settings: a namespaced key-value store, and the theme flag
//! and statistics counters kept in it.

mod error;
mod memory;
mod stats;
mod store;
mod theme;

pub use error::{ErrorScope, StoreError};
pub use memory::MemoryStore;
pub use stats::{Outcome, STATS_NAMESPACE, StatsRecord, StatsStore};
pub use store::SettingsStore;
pub use theme::{NIGHT_MODE_KEY, THEME_NAMESPACE, Theme, ThemeStore};
