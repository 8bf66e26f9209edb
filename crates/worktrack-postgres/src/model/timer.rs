//! Countdown timer model.

use diesel::prelude::*;
use jiff_diesel::Timestamp;

use crate::schema::timers;

/// A countdown timer. Durations are whole seconds.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = timers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Timer {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub duration: i32,
    pub remaining: i32,
    pub is_running: bool,
    pub is_completed: bool,
    pub created_at: Timestamp,
}

/// Data for creating a new timer.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = timers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewTimer {
    pub user_id: i64,
    pub name: String,
    pub duration: i32,
    pub remaining: i32,
}

/// Progress update reported by the client while a timer runs.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = timers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateTimer {
    pub remaining: i32,
    pub is_running: bool,
    pub is_completed: bool,
}
