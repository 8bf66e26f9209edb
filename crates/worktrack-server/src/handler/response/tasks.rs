//! Task response types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use worktrack_postgres::model;

#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    pub created_at: Timestamp,
}

impl From<model::Task> for Task {
    fn from(task: model::Task) -> Self {
        Self {
            id: task.id,
            text: task.text,
            completed: task.completed,
            created_at: task.created_at.into(),
        }
    }
}

/// Tasks, newest first.
pub type Tasks = Vec<Task>;
