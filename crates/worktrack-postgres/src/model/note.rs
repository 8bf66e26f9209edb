//! Note model.

use diesel::prelude::*;
use jiff_diesel::Timestamp;

use crate::schema::notes;

/// A free-form note owned by a single user.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = notes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Note {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    /// Set on every update.
    pub updated_at: Timestamp,
}

/// Data for creating a new note.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = notes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewNote {
    pub user_id: i64,
    pub title: String,
    pub content: String,
}

/// Replacement title and content for an existing note.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = notes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateNote {
    pub title: String,
    pub content: String,
}
