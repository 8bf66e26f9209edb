//! Task model.

use diesel::prelude::*;
use jiff_diesel::Timestamp;

use crate::schema::tasks;

/// A to-do item.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Task {
    pub id: i64,
    pub user_id: i64,
    pub text: String,
    pub completed: bool,
    pub created_at: Timestamp,
}

/// Data for creating a new task.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewTask {
    pub user_id: i64,
    pub text: String,
}

/// Partial update for a task; `None` fields are left untouched.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateTask {
    pub text: Option<String>,
    pub completed: Option<bool>,
}
