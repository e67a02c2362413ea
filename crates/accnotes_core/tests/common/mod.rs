//! Shared fixtures for integration tests.

use accnotes_core::{KeyValueStore, MemoryKeyValueStore, StorageError, StorageResult};

/// Memory store whose reads and writes can be switched to fail.
#[derive(Debug, Default)]
pub struct FlakyStore {
    pub inner: MemoryKeyValueStore,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub write_attempts: usize,
}

#[allow(dead_code)]
impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(key: &str, value: &str) -> Self {
        Self {
            inner: MemoryKeyValueStore::with_entry(key, value),
            ..Self::default()
        }
    }

    pub fn stored(&self, key: &str) -> Option<&str> {
        self.inner.peek(key)
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        if self.fail_reads {
            return Err(StorageError::Unavailable("read disabled".to_string()));
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.write_attempts += 1;
        if self.fail_writes {
            return Err(StorageError::Unavailable("write disabled".to_string()));
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("write disabled".to_string()));
        }
        self.inner.remove(key)
    }
}
