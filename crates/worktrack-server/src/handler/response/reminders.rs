//! Reminder response types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use worktrack_postgres::model;

#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub reminder_type: String,
    pub interval_seconds: Option<i32>,
    pub next_trigger: Timestamp,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl From<model::Reminder> for Reminder {
    fn from(reminder: model::Reminder) -> Self {
        Self {
            id: reminder.id,
            name: reminder.name,
            reminder_type: reminder.reminder_type,
            interval_seconds: reminder.interval_seconds,
            next_trigger: reminder.next_trigger.into(),
            is_active: reminder.is_active,
            created_at: reminder.created_at.into(),
        }
    }
}

pub type Reminders = Vec<Reminder>;
