//! Database models for persisted settings.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::db::schema;

/// One stored setting.
#[derive(Debug, Clone, Queryable, Selectable, Getters)]
#[diesel(table_name = schema::settings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Setting {
    namespace: String,
    key: String,
    value: String,
    updated_at: NaiveDateTime,
}

/// Insertable setting row.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::settings)]
pub struct NewSetting {
    namespace: String,
    key: String,
    value: String,
    updated_at: NaiveDateTime,
}
