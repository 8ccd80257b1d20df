//! redb table definitions shared by storage modules.

use redb::TableDefinition;

/// File name for the redb database within the configured DB directory.
pub const REDB_FILE_NAME: &str = "notes.redb";

/// Canonical note rows (`Note`, bincode-encoded) keyed by id.
pub const NOTES: TableDefinition<u64, &[u8]> = TableDefinition::new("notes");

/// Id allocator state. Holds the next id to hand out under [`NEXT_ID_KEY`].
pub const NOTE_SEQUENCE: TableDefinition<&str, u64> = TableDefinition::new("note_sequence");

/// Key of the single row in [`NOTE_SEQUENCE`].
pub const NEXT_ID_KEY: &str = "next_id";
