//! Store standing in for a medium that could not be opened.
//!
//! # Invariants
//! - Every call fails with `StorageError::Unavailable` carrying the reason.

use crate::storage::kv::{KeyValueStore, StorageError, StorageResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnavailableKeyValueStore {
    reason: String,
}

impl UnavailableKeyValueStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    fn failure(&self) -> StorageError {
        StorageError::Unavailable(self.reason.clone())
    }
}

impl KeyValueStore for UnavailableKeyValueStore {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(self.failure())
    }

    fn set(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(self.failure())
    }

    fn remove(&mut self, _key: &str) -> StorageResult<()> {
        Err(self.failure())
    }
}

#[cfg(test)]
mod tests {
    use super::UnavailableKeyValueStore;
    use crate::service::note_store::{LoadStatus, NoteStore, NoteStoreError};
    use crate::storage::kv::{KeyValueStore, StorageError};

    #[test]
    fn every_call_reports_the_reason() {
        let mut store = UnavailableKeyValueStore::new("disk gone");
        assert!(matches!(store.get("notes"), Err(StorageError::Unavailable(r)) if r == "disk gone"));
        assert!(store.set("notes", "[]").is_err());
        assert!(store.remove("notes").is_err());
    }

    #[test]
    fn boxed_store_recovers_empty_and_keeps_unsaved_notes() {
        let boxed: Box<dyn KeyValueStore + Send> = Box::new(UnavailableKeyValueStore::new("x"));
        let mut store = NoteStore::new(boxed);
        assert_eq!(store.load(), LoadStatus::Recovered);

        assert!(matches!(store.add("kept", ""), Err(NoteStoreError::Save(_))));
        assert_eq!(store.len(), 1);
    }
}
