//! Key/value storage for Neon Library.
//!
//! Collections and the locally generated identifier are plain text records
//! addressed by string keys. [`KeyValueStore`] is the only capability the
//! rest of the crate needs, so the store can be swapped between SQLite on
//! disk and a `HashMap` in tests.
//!
//! # Usage
//!
//! ```no_run
//! use neonlibrary::storage::{KeyValueStore, SqliteStore};
//!
//! let mut store = SqliteStore::open("neonlibrary.db").expect("failed to open store");
//! store.set("libraryId", "abc123").expect("write failed");
//! assert_eq!(store.get("libraryId").unwrap().as_deref(), Some("abc123"));
//! ```

pub mod memory;
pub mod migrations;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::types::errors::StorageError;

/// Get/set access to textual records.
pub trait KeyValueStore {
    /// Returns the value stored at `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` at `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
