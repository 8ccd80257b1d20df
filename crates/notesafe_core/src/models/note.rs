//! Note-related data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Note row as persisted by the store.
///
/// `content_at_rest` always holds codec output; plaintext content never
/// reaches storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub content_at_rest: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-facing note with decoded content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NoteView {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NoteView {
    /// Pair a stored row with its already-decoded content.
    pub fn from_decoded(note: Note, content: String) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

/// Request payload for creating a note.
///
/// Fields are optional at the wire level so that missing values surface as
/// validation errors rather than body rejections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Request payload for updating a note. Omitted fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Store-level partial replacement of a note row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content_at_rest: Option<String>,
}

impl NotePatch {
    /// Apply the patch in place and stamp `updated_at`.
    pub fn apply(self, note: &mut Note, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(content_at_rest) = self.content_at_rest {
            note.content_at_rest = content_at_rest;
        }
        note.updated_at = now;
    }
}
