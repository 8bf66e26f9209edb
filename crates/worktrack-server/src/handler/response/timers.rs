//! Timer response types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use worktrack_postgres::model;

#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timer {
    pub id: i64,
    pub name: String,
    pub duration: i32,
    pub remaining: i32,
    pub is_running: bool,
    pub is_completed: bool,
    pub created_at: Timestamp,
}

impl From<model::Timer> for Timer {
    fn from(timer: model::Timer) -> Self {
        Self {
            id: timer.id,
            name: timer.name,
            duration: timer.duration,
            remaining: timer.remaining,
            is_running: timer.is_running,
            is_completed: timer.is_completed,
            created_at: timer.created_at.into(),
        }
    }
}

pub type Timers = Vec<Timer>;
