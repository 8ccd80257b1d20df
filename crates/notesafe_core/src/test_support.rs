//! Shared test-only helpers for notesafe_core.

use crate::{Database, NoteService, XorCodec};
use tempfile::TempDir;

/// Creates an isolated temporary database and returns it with the temp dir.
///
/// Keep the [`TempDir`] alive for the full test to preserve the backing files.
pub(crate) fn setup_temp_db() -> (Database, TempDir) {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("db");
    let db = Database::new(db_path.to_str().expect("db path")).expect("db");
    (db, temp_dir)
}

/// Creates a [`NoteService`] over a temporary database with a fixed key.
pub(crate) fn setup_temp_service() -> (NoteService, TempDir) {
    let (db, temp_dir) = setup_temp_db();
    let codec = XorCodec::new("test-key").expect("codec");
    (NoteService::new(db, codec), temp_dir)
}
