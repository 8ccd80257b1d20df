//! Database integration tests.

use super::*;
use crate::models::note::NotePatch;
use crate::test_support::setup_temp_db;
use tempfile::TempDir;

#[test]
fn insert_assigns_increasing_ids_and_equal_timestamps() {
    let (db, _temp) = setup_temp_db();

    let first = db.notes.insert("first", "00").expect("insert first");
    let second = db.notes.insert("second", "01").expect("insert second");

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.created_at, first.updated_at);
    assert!(second.created_at >= first.created_at);
}

#[test]
fn insert_returns_the_row_it_stored() {
    let (db, _temp) = setup_temp_db();

    // Same title twice: each insert still hands back its own row.
    let a = db.notes.insert("dup", "aa").expect("insert a");
    let b = db.notes.insert("dup", "bb").expect("insert b");
    assert_ne!(a.id, b.id);

    let stored_b = db.notes.get(b.id).expect("get").expect("row b exists");
    assert_eq!(stored_b, b);
    assert_eq!(stored_b.content_at_rest, "bb");
}

#[test]
fn note_get_update_delete_roundtrip() {
    let (db, _temp) = setup_temp_db();
    let note = db.notes.insert("title", "abcd").expect("insert");

    let updated = db
        .notes
        .update(
            note.id,
            NotePatch {
                title: Some("renamed".to_string()),
                content_at_rest: None,
            },
        )
        .expect("update")
        .expect("note exists");
    assert_eq!(updated.title, "renamed");
    assert_eq!(updated.content_at_rest, "abcd");
    assert_eq!(updated.created_at, note.created_at);
    assert!(updated.updated_at >= note.updated_at);

    assert!(db.notes.delete(note.id).expect("delete"));
    assert!(db.notes.get(note.id).expect("get").is_none());
    assert!(!db.notes.delete(note.id).expect("second delete"));
}

#[test]
fn update_missing_note_returns_none() {
    let (db, _temp) = setup_temp_db();
    let result = db
        .notes
        .update(42, NotePatch::default())
        .expect("update should not error");
    assert!(result.is_none());
}

#[test]
fn ids_are_not_reused_after_delete() {
    let (db, _temp) = setup_temp_db();
    let first = db.notes.insert("a", "00").expect("insert");
    let second = db.notes.insert("b", "00").expect("insert");
    assert!(db.notes.delete(second.id).expect("delete"));

    let third = db.notes.insert("c", "00").expect("insert");
    assert!(third.id > second.id);
    assert!(third.id > first.id);
}

#[test]
fn list_all_and_count_track_rows() {
    let (db, _temp) = setup_temp_db();
    assert_eq!(db.notes.count().expect("count"), 0);
    assert!(db.notes.list_all().expect("list").is_empty());

    for title in ["one", "two", "three"] {
        db.notes.insert(title, "00").expect("insert");
    }
    let all = db.notes.list_all().expect("list");
    assert_eq!(db.notes.count().expect("count"), 3);
    assert_eq!(
        all.iter().map(|note| note.title.as_str()).collect::<Vec<_>>(),
        vec!["one", "two", "three"]
    );
}

#[test]
fn rows_and_sequence_survive_reopen() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("db");
    let path = path.to_str().expect("db path");

    let first_id = {
        let db = Database::new(path).expect("open");
        db.notes.insert("persisted", "beef").expect("insert").id
    };

    let reopened = Database::new(path).expect("reopen");
    let stored = reopened
        .notes
        .get(first_id)
        .expect("get")
        .expect("row survives reopen");
    assert_eq!(stored.content_at_rest, "beef");
    let next = reopened.notes.insert("next", "00").expect("insert");
    assert_eq!(next.id, first_id + 1);
}

#[test]
fn new_creates_missing_parent_directories() {
    let temp_dir = TempDir::new().expect("temp dir");
    let nested = temp_dir.path().join("a").join("b").join("db");
    let db = Database::new(nested.to_str().expect("db path")).expect("open nested");
    assert!(nested.join(tables::REDB_FILE_NAME).exists());
    drop(db);
}
