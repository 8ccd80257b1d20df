//! Database layer for NoteSafe.

/// Note storage helpers.
pub mod note;
/// redb table definitions.
pub mod tables;

use crate::error::AppError;
use std::path::Path;
use std::sync::Arc;

/// Database handle with access to the note tables.
pub struct Database {
    pub db: Arc<redb::Database>,
    pub notes: note::NoteDb,
}

impl Database {
    /// Build a database handle from an already-open redb instance.
    ///
    /// # Errors
    /// Returns an error if the note tables cannot be initialized.
    pub fn from_shared(db: Arc<redb::Database>) -> Result<Self, AppError> {
        Ok(Self {
            notes: note::NoteDb::new(db.clone())?,
            db,
        })
    }

    /// Open (or create) the database under the directory `path`.
    ///
    /// # Returns
    /// A fully initialized [`Database`].
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or redb cannot
    /// open the database file.
    pub fn new(path: &str) -> Result<Self, AppError> {
        let dir = Path::new(path);
        std::fs::create_dir_all(dir).map_err(|err| {
            AppError::StorageMessage(format!(
                "Failed to create database directory '{}': {}",
                dir.display(),
                err
            ))
        })?;

        let file = dir.join(tables::REDB_FILE_NAME);
        let db = redb::Database::create(&file)?;
        tracing::debug!("Opened note database at {}", file.display());
        Self::from_shared(Arc::new(db))
    }
}

#[cfg(test)]
mod tests;
