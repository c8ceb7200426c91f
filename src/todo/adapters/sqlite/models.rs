//! Diesel row models for todo persistence.

use super::schema::todos;
use diesel::prelude::*;

/// Query result and overwrite model for todo records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TodoRow {
    /// Storage-assigned identifier.
    pub id: i64,
    /// Short free-form summary.
    pub title: String,
    /// Longer free-form detail text.
    pub description: String,
}

/// Insert model for records without an identifier yet.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow {
    /// Short free-form summary.
    pub title: String,
    /// Longer free-form detail text.
    pub description: String,
}
