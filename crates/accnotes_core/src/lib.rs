//! Core domain logic for Accessible Notes.
//! This crate is the single source of truth for note list behavior.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod storage;

pub use config::AppConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{decode_notes, encode_notes, Note};
pub use search::filter::{search_notes, SearchHit, SearchView};
pub use service::alerts::{Alert, AlertQueue, AlertSeverity, Notifier};
pub use service::edit_session::{EditSession, EditTarget, NoteDraft};
pub use service::note_store::{
    LoadError, LoadStatus, NoteStore, NoteStoreError, NOTES_STORAGE_KEY,
};
pub use service::notes_screen::{NotesScreen, ScreenError};
pub use storage::kv::{KeyValueStore, StorageError, StorageResult};
pub use storage::memory_kv::MemoryKeyValueStore;
pub use storage::sqlite_kv::SqliteKeyValueStore;
pub use storage::unavailable_kv::UnavailableKeyValueStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
