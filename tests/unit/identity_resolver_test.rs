//! Unit tests for library identity resolution.

use neonlibrary::managers::identity_resolver::{generate_token, resolve, IdentitySource, TOKEN_LENGTH};
use neonlibrary::storage::{KeyValueStore, MemoryStore};
use neonlibrary::types::errors::StorageError;
use neonlibrary::types::location::PageLocation;
use neonlibrary::types::settings::StorageSettings;

fn page(url: &str) -> PageLocation {
    PageLocation::parse(url).unwrap()
}

/// A store whose every operation fails.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("broken".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("broken".to_string()))
    }
}

#[test]
fn query_parameter_wins_over_stored_id() {
    let settings = StorageSettings::default();
    let mut store = MemoryStore::new();
    store.set(&settings.identifier_key, "stored1").unwrap();

    let loc = page("neon://localhost/library?id=shared42");
    let resolved = resolve(Some(&loc), &mut store, &settings);

    assert_eq!(resolved.id, "shared42");
    assert_eq!(resolved.source, IdentitySource::QueryParameter);
    // The stored identifier is left alone.
    assert_eq!(
        store.get(&settings.identifier_key).unwrap().as_deref(),
        Some("stored1")
    );
}

#[test]
fn stored_id_is_reused_without_query() {
    let settings = StorageSettings::default();
    let mut store = MemoryStore::new();
    store.set("libraryId", "abc").unwrap();

    let loc = page("neon://localhost/library");
    let resolved = resolve(Some(&loc), &mut store, &settings);

    assert_eq!(resolved.id, "abc");
    assert_eq!(resolved.source, IdentitySource::Stored);
}

#[test]
fn fresh_store_generates_and_persists_token() {
    let settings = StorageSettings::default();
    let mut store = MemoryStore::new();

    let first = resolve(None, &mut store, &settings);
    assert_eq!(first.source, IdentitySource::Generated);
    assert_eq!(first.id.len(), TOKEN_LENGTH);
    assert_eq!(
        store.get("libraryId").unwrap().as_deref(),
        Some(first.id.as_str())
    );

    let second = resolve(None, &mut store, &settings);
    assert_eq!(second.id, first.id);
    assert_eq!(second.source, IdentitySource::Stored);
}

#[test]
fn empty_stored_id_is_ignored() {
    let settings = StorageSettings::default();
    let mut store = MemoryStore::new();
    store.set("libraryId", "").unwrap();

    let resolved = resolve(None, &mut store, &settings);
    assert_eq!(resolved.source, IdentitySource::Generated);
    assert!(!resolved.id.is_empty());
}

#[test]
fn empty_query_parameter_falls_back_to_stored_id() {
    let settings = StorageSettings::default();
    let mut store = MemoryStore::new();
    store.set("libraryId", "xyz").unwrap();

    let loc = page("neon://localhost/library?id=");
    let resolved = resolve(Some(&loc), &mut store, &settings);

    assert_eq!(resolved.id, "xyz");
    assert_eq!(resolved.source, IdentitySource::Stored);
}

#[test]
fn empty_query_parameter_without_stored_id_generates() {
    let settings = StorageSettings::default();
    let mut store = MemoryStore::new();

    let loc = page("neon://localhost/library?id=");
    let resolved = resolve(Some(&loc), &mut store, &settings);

    assert_eq!(resolved.source, IdentitySource::Generated);
    assert_eq!(resolved.id.len(), TOKEN_LENGTH);
}

#[test]
fn broken_store_still_resolves() {
    let settings = StorageSettings::default();
    let mut store = BrokenStore;

    let resolved = resolve(None, &mut store, &settings);
    assert_eq!(resolved.source, IdentitySource::Generated);
    assert_eq!(resolved.id.len(), TOKEN_LENGTH);
}

#[test]
fn custom_identifier_key_is_used() {
    let settings = StorageSettings {
        identifier_key: "otherKey".to_string(),
        ..StorageSettings::default()
    };
    let mut store = MemoryStore::new();
    store.set("otherKey", "zzz").unwrap();

    let resolved = resolve(None, &mut store, &settings);
    assert_eq!(resolved.id, "zzz");
}

#[test]
fn generated_tokens_differ() {
    let a = generate_token();
    let b = generate_token();
    assert_ne!(a, b);
    assert!(a
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
}
