//! Note store: canonical in-memory list plus whole-list persistence.
//!
//! # Responsibility
//! - Load the persisted list once per session.
//! - Apply add/edit/delete in memory, then persist the entire list.
//! - Serve search views from memory only.
//!
//! # Invariants
//! - After every successful mutation, memory equals the persisted value.
//! - A failed save never rolls back the in-memory change.
//! - Load failures are logged and recovered as an empty list.
//! - Log events carry counts and indexes only, never note content.

use crate::model::note::{decode_notes, encode_notes, Note};
use crate::search::filter::{search_notes, SearchView};
use crate::storage::kv::{KeyValueStore, StorageError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized note list.
pub const NOTES_STORAGE_KEY: &str = "notes";

/// Why the persisted list could not be restored.
#[derive(Debug)]
pub enum LoadError {
    /// Provider failed to read.
    Storage(StorageError),
    /// Stored value is not a note list.
    Malformed(serde_json::Error),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "failed to read notes: {err}"),
            Self::Malformed(err) => write!(f, "stored notes are malformed: {err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Malformed(err) => Some(err),
        }
    }
}

/// Error returned by mutating store operations.
#[derive(Debug)]
pub enum NoteStoreError {
    /// Target position does not exist in the current list.
    IndexOutOfRange { index: usize, len: usize },
    /// List could not be encoded for persistence.
    Encode(serde_json::Error),
    /// Provider rejected the write. The in-memory change is kept.
    Save(StorageError),
}

impl Display for NoteStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "note index {index} out of range for {len} note(s)")
            }
            Self::Encode(err) => write!(f, "failed to encode notes: {err}"),
            Self::Save(err) => write!(f, "failed to save notes: {err}"),
        }
    }
}

impl Error for NoteStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IndexOutOfRange { .. } => None,
            Self::Encode(err) => Some(err),
            Self::Save(err) => Some(err),
        }
    }
}

impl NoteStoreError {
    /// Returns whether the in-memory list changed despite the error.
    pub fn is_durability_gap(&self) -> bool {
        !matches!(self, Self::IndexOutOfRange { .. })
    }
}

/// Outcome of [`NoteStore::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Persisted list restored.
    Restored { count: usize },
    /// Nothing stored yet.
    Missing,
    /// Read or decode failed; defaulted to an empty list.
    Recovered,
}

/// Sole owner and writer of the note list.
pub struct NoteStore<S: KeyValueStore> {
    storage: S,
    key: String,
    notes: Vec<Note>,
}

impl<S: KeyValueStore> NoteStore<S> {
    /// Creates an empty store persisting under [`NOTES_STORAGE_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, NOTES_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            notes: Vec::new(),
        }
    }

    /// Replaces the in-memory list with the persisted one.
    ///
    /// Never fails: read or decode errors are logged and leave the list
    /// empty. There is no retry.
    pub fn load(&mut self) -> LoadStatus {
        match self.try_load() {
            Ok(Some(count)) => {
                info!("event=notes_load module=store status=ok count={count}");
                LoadStatus::Restored { count }
            }
            Ok(None) => {
                info!("event=notes_load module=store status=ok count=0 stored=false");
                LoadStatus::Missing
            }
            Err(err) => {
                warn!(
                    "event=notes_load module=store status=error error_code=load_failed error={err}"
                );
                self.notes.clear();
                LoadStatus::Recovered
            }
        }
    }

    /// Loads the persisted list, returning the restored count.
    ///
    /// `Ok(None)` means the key is absent; the list is then empty. On error
    /// the in-memory list is left untouched.
    pub fn try_load(&mut self) -> Result<Option<usize>, LoadError> {
        let Some(raw) = self.storage.get(&self.key).map_err(LoadError::Storage)? else {
            self.notes.clear();
            return Ok(None);
        };
        self.notes = decode_notes(&raw).map_err(LoadError::Malformed)?;
        Ok(Some(self.notes.len()))
    }

    /// Appends a note, then persists the full list.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<(), NoteStoreError> {
        self.notes.push(Note::new(title, text));
        let index = self.notes.len() - 1;
        self.persist("note_add", index)
    }

    /// Replaces the note at `index`, then persists the full list.
    pub fn edit(
        &mut self,
        index: usize,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<(), NoteStoreError> {
        let len = self.notes.len();
        let Some(slot) = self.notes.get_mut(index) else {
            warn!("event=note_edit module=store status=error error_code=index_out_of_range index={index} len={len}");
            return Err(NoteStoreError::IndexOutOfRange { index, len });
        };
        *slot = Note::new(title, text);
        self.persist("note_edit", index)
    }

    /// Removes the note at `index`, then persists the full list.
    ///
    /// Later notes shift down by one position.
    pub fn delete(&mut self, index: usize) -> Result<Note, NoteStoreError> {
        let len = self.notes.len();
        if index >= len {
            warn!("event=note_delete module=store status=error error_code=index_out_of_range index={index} len={len}");
            return Err(NoteStoreError::IndexOutOfRange { index, len });
        }
        let removed = self.notes.remove(index);
        self.persist("note_delete", index)?;
        Ok(removed)
    }

    /// Filters the in-memory list. Storage is not consulted.
    pub fn search(&self, query: &str) -> SearchView<'_> {
        search_notes(&self.notes, query)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    fn persist(&mut self, event: &'static str, index: usize) -> Result<(), NoteStoreError> {
        let count = self.notes.len();
        let encoded = encode_notes(&self.notes).map_err(|err| {
            error!("event={event} module=store status=error error_code=encode_failed index={index} error={err}");
            NoteStoreError::Encode(err)
        })?;
        self.storage.set(&self.key, &encoded).map_err(|err| {
            error!("event={event} module=store status=error error_code=save_failed index={index} count={count} error={err}");
            NoteStoreError::Save(err)
        })?;
        info!("event={event} module=store status=ok index={index} count={count}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{LoadStatus, NoteStore, NoteStoreError, NOTES_STORAGE_KEY};
    use crate::storage::memory_kv::MemoryKeyValueStore;

    #[test]
    fn load_from_empty_storage_reports_missing() {
        let mut store = NoteStore::new(MemoryKeyValueStore::new());
        assert_eq!(store.load(), LoadStatus::Missing);
        assert!(store.is_empty());
    }

    #[test]
    fn edit_out_of_range_does_not_persist() {
        let mut store = NoteStore::new(MemoryKeyValueStore::new());
        let err = store.edit(0, "t", "x").unwrap_err();
        assert!(matches!(
            err,
            NoteStoreError::IndexOutOfRange { index: 0, len: 0 }
        ));
        assert!(!err.is_durability_gap());
        assert!(store.storage().peek(NOTES_STORAGE_KEY).is_none());
    }

    #[test]
    fn delete_returns_removed_note() {
        let mut store = NoteStore::new(MemoryKeyValueStore::new());
        store.add("a", "1").unwrap();
        store.add("b", "2").unwrap();
        let removed = store.delete(0).unwrap();
        assert_eq!(removed.title, "a");
        assert_eq!(store.get(0).map(|note| note.title.as_str()), Some("b"));
    }

    #[test]
    fn custom_key_is_used_for_persistence() {
        let mut store = NoteStore::with_key(MemoryKeyValueStore::new(), "scratch");
        store.add("", "").unwrap();
        assert_eq!(
            store.storage().peek("scratch"),
            Some(r#"[{"title":"","text":""}]"#)
        );
        assert!(store.storage().peek(NOTES_STORAGE_KEY).is_none());
    }
}
