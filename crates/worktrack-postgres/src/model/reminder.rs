//! Reminder model.

use diesel::prelude::*;
use jiff_diesel::Timestamp;

use crate::schema::reminders;

/// A one-off or recurring reminder.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = reminders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Reminder {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    /// Free-form kind chosen by the client (e.g. `interval`, `once`).
    pub reminder_type: String,
    /// Repeat interval in seconds for recurring reminders.
    pub interval_seconds: Option<i32>,
    pub next_trigger: Timestamp,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// Data for creating a new reminder.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = reminders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewReminder {
    pub user_id: i64,
    pub name: String,
    pub reminder_type: String,
    pub interval_seconds: Option<i32>,
    pub next_trigger: Timestamp,
}

/// Reschedule or (de)activate a reminder.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = reminders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateReminder {
    pub next_trigger: Timestamp,
    pub is_active: bool,
}
