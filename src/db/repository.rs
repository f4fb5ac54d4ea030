//! SQLite-backed settings store.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::db::{NewSetting, Setting, schema};
use crate::settings::{SettingsStore, StoreError};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// How long a connection waits on a locked database.
const BUSY_TIMEOUT_MS: u32 = 5_000;

/// Settings store persisted in an SQLite database file.
///
/// Each operation opens its own connection, so the store is cheap to
/// clone and holds no open handle between calls. In-memory databases
/// (`":memory:"`) are therefore not supported: every connection would
/// see a fresh, empty database.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: String,
}

impl SqliteStore {
    /// Opens the database at `db_path`, creating it and applying pending
    /// migrations as needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the database cannot be opened or migrated.
    #[instrument(skip(db_path), fields(db_path = %db_path.as_ref()))]
    pub fn open(db_path: impl AsRef<str>) -> Result<Self, StoreError> {
        let store = Self {
            db_path: db_path.as_ref().to_string(),
        };

        let mut conn = store.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::new(format!("Failed to apply migrations: {}", e)))?;

        info!(
            path = %store.db_path,
            migrations_applied = applied.len(),
            "Settings database ready"
        );
        Ok(store)
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, StoreError> {
        debug!(path = %self.db_path, "Establishing connection");
        let mut conn = SqliteConnection::establish(&self.db_path).map_err(|e| {
            StoreError::new(format!("Failed to connect to '{}': {}", self.db_path, e))
        })?;
        // Wait for other writers instead of failing with SQLITE_BUSY.
        conn.batch_execute(&format!("PRAGMA busy_timeout = {};", BUSY_TIMEOUT_MS))?;
        Ok(conn)
    }
}

impl SettingsStore for SqliteStore {
    #[instrument(skip(self))]
    fn get(&self, namespace: &str, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.connection()?;
        let row = find_setting(&mut conn, namespace, key)
            .map_err(|e| StoreError::from(e).with_setting(namespace, key))?;
        Ok(row.map(|setting| setting.value().clone()))
    }

    #[instrument(skip(self))]
    fn set(&mut self, namespace: &str, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.connection()?;
        upsert_setting(&mut conn, namespace, key, value)
            .map_err(|e| StoreError::from(e).with_setting(namespace, key))
    }

    /// Runs the read and the write inside one `BEGIN IMMEDIATE`
    /// transaction, so concurrent writers cannot interleave.
    #[instrument(skip(self, next))]
    fn update(
        &mut self,
        namespace: &str,
        key: &str,
        next: &mut dyn FnMut(Option<&str>) -> Result<String, StoreError>,
    ) -> Result<String, StoreError> {
        let mut conn = self.connection()?;
        conn.immediate_transaction::<_, StoreError, _>(|conn| {
            let current = find_setting(conn, namespace, key)?;
            let value = next(current.as_ref().map(|setting| setting.value().as_str()))?;
            upsert_setting(conn, namespace, key, &value)?;
            Ok(value)
        })
        .map_err(|e| e.with_setting(namespace, key))
    }
}

fn find_setting(
    conn: &mut SqliteConnection,
    namespace: &str,
    key: &str,
) -> QueryResult<Option<Setting>> {
    let row = schema::settings::table
        .filter(schema::settings::namespace.eq(namespace))
        .filter(schema::settings::key.eq(key))
        .select(Setting::as_select())
        .first(conn)
        .optional()?;

    match &row {
        Some(setting) => debug!(updated_at = %setting.updated_at(), "Setting found"),
        None => debug!("Setting not found"),
    }
    Ok(row)
}

fn upsert_setting(
    conn: &mut SqliteConnection,
    namespace: &str,
    key: &str,
    value: &str,
) -> QueryResult<()> {
    let now = chrono::Utc::now().naive_utc();
    let row = NewSetting::new(
        namespace.to_string(),
        key.to_string(),
        value.to_string(),
        now,
    );

    diesel::insert_into(schema::settings::table)
        .values(&row)
        .on_conflict((schema::settings::namespace, schema::settings::key))
        .do_update()
        .set((
            schema::settings::value.eq(value),
            schema::settings::updated_at.eq(now),
        ))
        .execute(conn)?;

    debug!(namespace = %row.namespace(), key = %row.key(), "Setting written");
    Ok(())
}
