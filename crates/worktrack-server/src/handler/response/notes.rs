//! Note response types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use worktrack_postgres::model;

/// A note as returned to its owner.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<model::Note> for Note {
    fn from(note: model::Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            created_at: note.created_at.into(),
            updated_at: note.updated_at.into(),
        }
    }
}

/// Single note wrapped as `{"note": ...}`.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteEnvelope {
    pub note: Note,
}

impl From<model::Note> for NoteEnvelope {
    fn from(note: model::Note) -> Self {
        Self { note: note.into() }
    }
}

/// Note listing wrapped as `{"notes": [...]}`, most recently updated first.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notes {
    pub notes: Vec<Note>,
}

impl From<Vec<model::Note>> for Notes {
    fn from(notes: Vec<model::Note>) -> Self {
        Self {
            notes: notes.into_iter().map(Note::from).collect(),
        }
    }
}
