//! Key-value persistence boundary.
//!
//! # Responsibility
//! - Define the storage contract consumed by the note store.
//! - Provide SQLite-backed and in-memory implementations.
//!
//! # Invariants
//! - Values are opaque UTF-8 text; codecs live with their callers.
//! - `set` fully replaces any previous value for the key.

pub mod kv;
pub mod memory_kv;
pub mod sqlite_kv;
pub mod unavailable_kv;
