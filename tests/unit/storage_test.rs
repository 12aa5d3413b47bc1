//! Unit tests for the key/value storage backends.

use rstest::rstest;
use tempfile::TempDir;

use neonlibrary::storage::migrations::{get_schema_version, CURRENT_SCHEMA_VERSION};
use neonlibrary::storage::{KeyValueStore, MemoryStore, SqliteStore};

fn sqlite() -> Box<dyn KeyValueStore> {
    Box::new(SqliteStore::open_in_memory().expect("open_in_memory failed"))
}

fn memory() -> Box<dyn KeyValueStore> {
    Box::new(MemoryStore::new())
}

#[rstest]
#[case::sqlite(sqlite())]
#[case::memory(memory())]
fn missing_key_reads_as_none(#[case] store: Box<dyn KeyValueStore>) {
    assert_eq!(store.get("library-nothing").unwrap(), None);
}

#[rstest]
#[case::sqlite(sqlite())]
#[case::memory(memory())]
fn set_then_get_returns_value(#[case] mut store: Box<dyn KeyValueStore>) {
    store.set("libraryId", "abc123").unwrap();
    assert_eq!(store.get("libraryId").unwrap().as_deref(), Some("abc123"));
}

#[rstest]
#[case::sqlite(sqlite())]
#[case::memory(memory())]
fn set_overwrites_previous_value(#[case] mut store: Box<dyn KeyValueStore>) {
    store.set("library-a", "[1]").unwrap();
    store.set("library-a", "[]").unwrap();
    assert_eq!(store.get("library-a").unwrap().as_deref(), Some("[]"));
}

#[rstest]
#[case::sqlite(sqlite())]
#[case::memory(memory())]
fn keys_are_independent(#[case] mut store: Box<dyn KeyValueStore>) {
    store.set("library-a", "A").unwrap();
    store.set("library-b", "B").unwrap();
    assert_eq!(store.get("library-a").unwrap().as_deref(), Some("A"));
    assert_eq!(store.get("library-b").unwrap().as_deref(), Some("B"));
}

#[test]
fn migrations_create_local_storage_table() {
    let store = SqliteStore::open_in_memory().unwrap();
    let exists: bool = store
        .connection()
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='local_storage'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(exists);
    assert_eq!(get_schema_version(store.connection()), CURRENT_SCHEMA_VERSION);
}

#[test]
fn sqlite_values_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("neonlibrary.db");

    {
        let mut store = SqliteStore::open(&path).unwrap();
        store.set("library-xyz", "[{\"id\":1}]").unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(
        store.get("library-xyz").unwrap().as_deref(),
        Some("[{\"id\":1}]")
    );
    assert_eq!(store.keys().unwrap(), vec!["library-xyz".to_string()]);
}

#[test]
fn reopening_does_not_rerun_migrations() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("neonlibrary.db");
    drop(SqliteStore::open(&path).unwrap());

    let store = SqliteStore::open(&path).unwrap();
    let rows: i64 = store
        .connection()
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn memory_store_tracks_size() {
    let mut store = MemoryStore::new();
    assert!(store.is_empty());
    store.set("a", "1").unwrap();
    store.set("a", "2").unwrap();
    assert_eq!(store.len(), 1);
}
