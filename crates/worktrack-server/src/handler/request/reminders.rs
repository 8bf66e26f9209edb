//! Reminder request types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use validator::Validate;
use worktrack_postgres::model::{NewReminder, UpdateReminder};

use super::validations::not_blank;

/// Request payload for creating a reminder.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReminder {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    /// Client-defined kind, such as `interval` or `once`.
    #[serde(rename = "type")]
    #[validate(custom(function = "not_blank"))]
    pub reminder_type: String,
    /// Repeat interval in seconds for recurring reminders.
    #[serde(default)]
    #[validate(range(min = 1))]
    pub interval_seconds: Option<i32>,
    /// When the reminder fires next, as an RFC 3339 timestamp.
    pub next_trigger: Timestamp,
}

impl CreateReminder {
    pub fn into_model(self, user_id: i64) -> NewReminder {
        NewReminder {
            user_id,
            name: self.name,
            reminder_type: self.reminder_type,
            interval_seconds: self.interval_seconds,
            next_trigger: self.next_trigger.into(),
        }
    }
}

/// Reschedules or (de)activates a reminder.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateReminderRequest {
    pub next_trigger: Timestamp,
    pub is_active: bool,
}

impl UpdateReminderRequest {
    pub fn into_model(self) -> UpdateReminder {
        UpdateReminder {
            next_trigger: self.next_trigger.into(),
            is_active: self.is_active,
        }
    }
}
