//! Collection Store for Neon Library.
//!
//! Implements `CollectionStoreTrait`: the ordered list of entries for one
//! library identifier, loaded from a [`KeyValueStore`] and written back in
//! full after every mutation.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::storage::KeyValueStore;
use crate::types::entry::{Draft, Entry, EntryId};
use crate::types::errors::{AddRejection, LibraryError};

/// Trait defining collection operations.
pub trait CollectionStoreTrait {
    fn load(&mut self, store: &dyn KeyValueStore);
    fn persist(&self, store: &mut dyn KeyValueStore) -> Result<(), LibraryError>;
    fn add_entry(&mut self, draft: &Draft, store: &mut dyn KeyValueStore) -> Result<Entry, LibraryError>;
    fn remove_entry(&mut self, id: EntryId, store: &mut dyn KeyValueStore) -> Result<Option<Entry>, LibraryError>;
    fn get_entry(&self, id: EntryId) -> Option<&Entry>;
    fn entries(&self) -> &[Entry];
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// In-memory cache of one library's collection.
pub struct CollectionStore {
    storage_key: String,
    entries: Vec<Entry>,
}

impl CollectionStore {
    /// Creates an empty store that reads and writes `storage_key`.
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
            entries: Vec::new(),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Checks that a draft carries the required fields.
    pub fn validate(draft: &Draft) -> Result<(), AddRejection> {
        if draft.title.is_empty() {
            return Err(AddRejection::MissingTitle);
        }
        if draft.url.is_empty() {
            return Err(AddRejection::MissingUrl);
        }
        Ok(())
    }

    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// Picks an id for a new entry: the current time, or one past the
    /// largest existing id when the clock has not moved on.
    fn next_id(&self) -> EntryId {
        let now = Self::now_millis();
        match self.entries.iter().map(|e| e.id).max() {
            Some(max) if now <= max => max + 1,
            _ => now,
        }
    }

    /// Parses a stored record. `None` means the record was unusable.
    fn parse_record(raw: &str) -> Option<Vec<Entry>> {
        match serde_json::from_str(raw) {
            Ok(entries) => Some(entries),
            Err(e) => {
                tracing::warn!(error = %e, "error loading library, starting empty");
                None
            }
        }
    }
}

impl CollectionStoreTrait for CollectionStore {
    /// Replaces the in-memory list with the stored record.
    ///
    /// A missing, unreadable or malformed record leaves the collection empty.
    fn load(&mut self, store: &dyn KeyValueStore) {
        self.entries = match store.get(&self.storage_key) {
            Ok(Some(raw)) => Self::parse_record(&raw).unwrap_or_default(),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, key = %self.storage_key, "failed to read library");
                Vec::new()
            }
        };
        tracing::debug!(key = %self.storage_key, count = self.entries.len(), "library loaded");
    }

    /// Writes the whole collection, including an empty one.
    fn persist(&self, store: &mut dyn KeyValueStore) -> Result<(), LibraryError> {
        let json = serde_json::to_string(&self.entries)
            .map_err(|e| LibraryError::SerializationError(e.to_string()))?;
        store.set(&self.storage_key, &json)?;
        Ok(())
    }

    /// Appends a new entry built from `draft`.
    ///
    /// Rejected drafts leave the collection and storage untouched. A failed
    /// write is reported but the entry stays in memory.
    fn add_entry(&mut self, draft: &Draft, store: &mut dyn KeyValueStore) -> Result<Entry, LibraryError> {
        Self::validate(draft)?;

        let entry = Entry::from_draft(draft, self.next_id());
        self.entries.push(entry.clone());
        tracing::debug!(id = entry.id, category = %entry.category, "entry added");

        self.persist(store)?;
        Ok(entry)
    }

    /// Removes the entry with `id`. Unknown ids are a no-op without a write.
    fn remove_entry(&mut self, id: EntryId, store: &mut dyn KeyValueStore) -> Result<Option<Entry>, LibraryError> {
        let Some(index) = self.entries.iter().position(|e| e.id == id) else {
            return Ok(None);
        };
        let removed = self.entries.remove(index);
        tracing::debug!(id, "entry removed");

        self.persist(store)?;
        Ok(Some(removed))
    }

    fn get_entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn entries(&self) -> &[Entry] {
        &self.entries
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
