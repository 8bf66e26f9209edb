//! Note request types.

use serde::{Deserialize, Serialize};
use validator::Validate;
use worktrack_postgres::model::{NewNote, UpdateNote};

use super::validations::not_blank;

/// Request payload for creating a note.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateNote {
    /// Title; surrounding whitespace is removed.
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    /// Body text, empty when omitted.
    #[serde(default)]
    pub content: String,
}

impl CreateNote {
    pub fn into_model(self, user_id: i64) -> NewNote {
        NewNote {
            user_id,
            title: self.title.trim().to_owned(),
            content: self.content,
        }
    }
}

/// Request payload for replacing a note's title and content.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateNoteRequest {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl UpdateNoteRequest {
    pub fn into_model(self) -> UpdateNote {
        UpdateNote {
            title: self.title.trim().to_owned(),
            content: self.content.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_defaults_to_empty() -> anyhow::Result<()> {
        let request: CreateNote = serde_json::from_value(serde_json::json!({
            "title": "  Groceries  ",
        }))?;

        assert!(request.validate().is_ok());
        let model = request.into_model(9);
        assert_eq!(model.user_id, 9);
        assert_eq!(model.title, "Groceries");
        assert_eq!(model.content, "");
        Ok(())
    }

    #[test]
    fn blank_title_is_invalid() -> anyhow::Result<()> {
        let request: UpdateNoteRequest = serde_json::from_value(serde_json::json!({
            "title": "   ",
            "content": "body",
        }))?;

        assert!(request.validate().is_err());
        Ok(())
    }
}
