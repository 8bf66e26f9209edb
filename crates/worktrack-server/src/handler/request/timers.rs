//! Timer request types.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use worktrack_postgres::model::{NewTimer, UpdateTimer};

use super::validations::not_blank;

/// Request payload for creating a countdown timer.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "remaining_within_duration"))]
pub struct CreateTimer {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    /// Total length in seconds.
    #[validate(range(min = 1))]
    pub duration: i32,
    /// Seconds left, defaults to the full duration.
    #[serde(default)]
    #[validate(range(min = 0))]
    pub remaining: Option<i32>,
}

fn remaining_within_duration(timer: &CreateTimer) -> Result<(), ValidationError> {
    match timer.remaining {
        Some(remaining) if remaining > timer.duration => {
            let mut error = ValidationError::new("range");
            error.message = Some("remaining must not exceed duration".into());
            Err(error)
        }
        _ => Ok(()),
    }
}

impl CreateTimer {
    pub fn into_model(self, user_id: i64) -> NewTimer {
        NewTimer {
            user_id,
            name: self.name,
            duration: self.duration,
            remaining: self.remaining.unwrap_or(self.duration),
        }
    }
}

/// Progress update for a running timer.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTimerRequest {
    #[validate(range(min = 0))]
    pub remaining: i32,
    pub is_running: bool,
    pub is_completed: bool,
}

impl UpdateTimerRequest {
    pub fn into_model(self) -> UpdateTimer {
        UpdateTimer {
            remaining: self.remaining,
            is_running: self.is_running,
            is_completed: self.is_completed,
        }
    }
}
