//! Task request types.

use serde::{Deserialize, Serialize};
use validator::Validate;
use worktrack_postgres::model::{NewTask, UpdateTask};

use super::validations::not_blank;

/// Request payload for creating a task.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTask {
    #[validate(custom(function = "not_blank"))]
    pub text: String,
}

impl CreateTask {
    pub fn into_model(self, user_id: i64) -> NewTask {
        NewTask {
            user_id,
            text: self.text,
        }
    }
}

/// Partial update for a task; omitted fields keep their value.
#[must_use]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub text: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl UpdateTaskRequest {
    pub fn into_model(self) -> UpdateTask {
        UpdateTask {
            text: self.text,
            completed: self.completed,
        }
    }
}
