//! Note orchestration over the codec, the listing engine and the store.

use crate::codec::XorCodec;
use crate::db::Database;
use crate::error::AppError;
use crate::listing;
use crate::models::note::{CreateNoteRequest, Note, NotePatch, NoteView, UpdateNoteRequest};
use crate::models::page::{PageRequest, PageResult};

/// Create/read/update/delete operations for notes.
///
/// Plaintext content only exists in requests and [`NoteView`]s; the store
/// sees codec output.
pub struct NoteService {
    db: Database,
    codec: XorCodec,
}

fn require_non_empty(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        Some(_) => Err(AppError::Validation(format!("{} should not be empty", field))),
        None => Err(AppError::Validation(format!("{} is required", field))),
    }
}

fn reject_empty(field: &str, value: Option<String>) -> Result<Option<String>, AppError> {
    match value {
        Some(value) if value.is_empty() => {
            Err(AppError::Validation(format!("{} should not be empty", field)))
        }
        other => Ok(other),
    }
}

impl NoteService {
    /// Wire a service to an open database and the active codec.
    pub fn new(db: Database, codec: XorCodec) -> Self {
        Self { db, codec }
    }

    /// Underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }

    fn to_view(&self, note: Note) -> Result<NoteView, AppError> {
        let content = self.codec.decode(&note.content_at_rest)?;
        Ok(NoteView::from_decoded(note, content))
    }

    /// Create a note.
    ///
    /// # Errors
    /// Returns [`AppError::Validation`] when `title` or `content` is missing
    /// or empty, or a storage error when the insert fails.
    pub fn create(&self, req: CreateNoteRequest) -> Result<NoteView, AppError> {
        let title = require_non_empty("title", req.title)?;
        let content = require_non_empty("content", req.content)?;

        let note = self.db.notes.insert(&title, &self.codec.encode(&content))?;
        tracing::debug!(id = note.id, "Created note");
        Ok(NoteView::from_decoded(note, content))
    }

    /// Fetch one note.
    ///
    /// # Errors
    /// Returns [`AppError::NotFound`] when no note has `id`.
    pub fn get(&self, id: u64) -> Result<NoteView, AppError> {
        let note = self.db.notes.get(id)?.ok_or(AppError::NotFound)?;
        self.to_view(note)
    }

    /// List one page of notes, optionally filtered by `search`.
    ///
    /// # Errors
    /// Returns a storage error, or [`AppError::InvalidInput`] when a row that
    /// must be decoded is malformed.
    pub fn list(
        &self,
        request: PageRequest,
        search: Option<&str>,
    ) -> Result<PageResult<NoteView>, AppError> {
        let notes = self.db.notes.list_all()?;
        listing::list_page(notes, request, search, &self.codec)
    }

    /// Update a note. Omitted fields keep their stored value.
    ///
    /// # Errors
    /// Returns [`AppError::NotFound`] when no note has `id`, or
    /// [`AppError::Validation`] when a provided field is empty.
    pub fn update(&self, id: u64, req: UpdateNoteRequest) -> Result<NoteView, AppError> {
        let title = reject_empty("title", req.title)?;
        let content = reject_empty("content", req.content)?;

        let patch = NotePatch {
            title,
            content_at_rest: content.as_deref().map(|content| self.codec.encode(content)),
        };
        let note = self.db.notes.update(id, patch)?.ok_or(AppError::NotFound)?;
        tracing::debug!(id, "Updated note");
        match content {
            Some(content) => Ok(NoteView::from_decoded(note, content)),
            None => self.to_view(note),
        }
    }

    /// Permanently delete a note.
    ///
    /// # Errors
    /// Returns [`AppError::NotFound`] when no note has `id`.
    pub fn delete(&self, id: u64) -> Result<(), AppError> {
        if !self.db.notes.delete(id)? {
            return Err(AppError::NotFound);
        }
        tracing::debug!(id, "Deleted note");
        Ok(())
    }
}
