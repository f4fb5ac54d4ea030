//! SQLite persistence for the settings store.

mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only

pub use models::{NewSetting, Setting};
pub use repository::SqliteStore;
