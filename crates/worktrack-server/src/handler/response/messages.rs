use serde::{Deserialize, Serialize};

/// Plain acknowledgement body, e.g. `{"message": "Note deleted successfully"}`.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of a bulk delete.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub message: String,
    pub deleted: usize,
}

impl DeletedResponse {
    pub fn new(message: impl Into<String>, deleted: usize) -> Self {
        Self {
            message: message.into(),
            deleted,
        }
    }
}

/// Per-table counts removed by clear-all.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearAllResponse {
    pub message: String,
    pub tasks_deleted: usize,
    pub timers_deleted: usize,
    pub reminders_deleted: usize,
}
