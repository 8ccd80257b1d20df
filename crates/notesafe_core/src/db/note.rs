//! Note storage operations backed by redb.

use crate::{db::tables::*, error::AppError, models::note::*};
use chrono::Utc;
use redb::{ReadableDatabase, ReadableTable, ReadableTableMetadata};
use std::sync::Arc;

fn deserialize_note(bytes: &[u8]) -> Result<Note, bincode::Error> {
    bincode::deserialize(bytes)
}

/// Accessor for note-related redb tables.
pub struct NoteDb {
    db: Arc<redb::Database>,
}

impl NoteDb {
    /// Initialize note tables if they do not exist yet.
    ///
    /// # Errors
    /// Returns an error when redb transaction/table initialization fails.
    pub fn new(db: Arc<redb::Database>) -> Result<Self, AppError> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(NOTES)?;
        write_txn.open_table(NOTE_SEQUENCE)?;
        write_txn.commit()?;
        Ok(Self { db })
    }

    /// Insert a new note and return the stored row.
    ///
    /// Id allocation and the row write share one write transaction, so the
    /// caller gets its own row back without a follow-up lookup.
    ///
    /// # Arguments
    /// - `title`: Plaintext title.
    /// - `content_at_rest`: Codec output for the note content.
    ///
    /// # Returns
    /// The inserted [`Note`] with its assigned id and timestamps.
    ///
    /// # Errors
    /// Returns an error when serialization or storage operations fail.
    pub fn insert(&self, title: &str, content_at_rest: &str) -> Result<Note, AppError> {
        let write_txn = self.db.begin_write()?;
        let note = {
            let mut notes = write_txn.open_table(NOTES)?;
            let mut sequence = write_txn.open_table(NOTE_SEQUENCE)?;

            let id = sequence
                .get(NEXT_ID_KEY)?
                .map(|guard| guard.value())
                .unwrap_or(1);
            let next_id = id.checked_add(1).ok_or_else(|| {
                AppError::StorageMessage("Note id sequence exhausted".to_string())
            })?;
            if notes.get(id)?.is_some() {
                return Err(AppError::StorageMessage(format!(
                    "Note id {} already exists",
                    id
                )));
            }

            let now = Utc::now();
            let note = Note {
                id,
                title: title.to_string(),
                content_at_rest: content_at_rest.to_string(),
                created_at: now,
                updated_at: now,
            };
            let encoded = bincode::serialize(&note)?;
            notes.insert(id, encoded.as_slice())?;
            sequence.insert(NEXT_ID_KEY, next_id)?;
            note
        };
        write_txn.commit()?;
        Ok(note)
    }

    /// Fetch a note by id.
    ///
    /// # Returns
    /// `Ok(Some(note))` when found, `Ok(None)` when missing.
    ///
    /// # Errors
    /// Returns an error when storage access or deserialization fails.
    pub fn get(&self, id: u64) -> Result<Option<Note>, AppError> {
        let read_txn = self.db.begin_read()?;
        let notes = read_txn.open_table(NOTES)?;
        match notes.get(id)? {
            Some(value) => Ok(Some(deserialize_note(value.value())?)),
            None => Ok(None),
        }
    }

    /// Return every stored note in id order.
    ///
    /// # Errors
    /// Returns an error when storage access or deserialization fails.
    pub fn list_all(&self) -> Result<Vec<Note>, AppError> {
        let read_txn = self.db.begin_read()?;
        let notes_table = read_txn.open_table(NOTES)?;
        let mut notes = Vec::new();
        for item in notes_table.iter()? {
            let (_, value) = item?;
            notes.push(deserialize_note(value.value())?);
        }
        Ok(notes)
    }

    /// Count stored notes.
    ///
    /// # Errors
    /// Returns an error when storage access fails.
    pub fn count(&self) -> Result<u64, AppError> {
        let read_txn = self.db.begin_read()?;
        let notes = read_txn.open_table(NOTES)?;
        Ok(notes.len()?)
    }

    /// Apply a partial update to a note.
    ///
    /// The lookup and the write happen inside one write transaction.
    ///
    /// # Returns
    /// `Ok(Some(note))` when updated, `Ok(None)` when missing.
    ///
    /// # Errors
    /// Returns an error when storage access or serialization fails.
    pub fn update(&self, id: u64, patch: NotePatch) -> Result<Option<Note>, AppError> {
        let write_txn = self.db.begin_write()?;
        let updated = {
            let mut notes = write_txn.open_table(NOTES)?;
            let Some(old_guard) = notes.get(id)? else {
                return Ok(None);
            };
            let mut note = deserialize_note(old_guard.value())?;
            drop(old_guard);

            patch.apply(&mut note, Utc::now());
            let encoded = bincode::serialize(&note)?;
            notes.insert(id, encoded.as_slice())?;
            note
        };
        write_txn.commit()?;
        Ok(Some(updated))
    }

    /// Delete a note by id.
    ///
    /// Ids are never reused after deletion.
    ///
    /// # Returns
    /// `true` when a row was deleted, otherwise `false`.
    ///
    /// # Errors
    /// Returns an error when storage access fails.
    pub fn delete(&self, id: u64) -> Result<bool, AppError> {
        let write_txn = self.db.begin_write()?;
        let deleted = {
            let mut notes = write_txn.open_table(NOTES)?;
            let removed = notes.remove(id)?;
            removed.is_some()
        };
        write_txn.commit()?;
        Ok(deleted)
    }
}
