//! Note record and its persisted list codec.
//!
//! # Invariants
//! - The serialized list is a JSON array of `{"title", "text"}` objects with
//!   no envelope or version field.
//! - `decode_notes(&encode_notes(list)?)? == list` for every list.

use serde::{Deserialize, Serialize};

/// One user-authored memo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    /// Free text body; may contain newlines.
    pub text: String,
}

impl Note {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    /// Case-insensitive substring match over title or text.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.text.to_lowercase().contains(needle)
    }
}

/// Serializes the whole list in compact form.
pub fn encode_notes(notes: &[Note]) -> serde_json::Result<String> {
    serde_json::to_string(notes)
}

/// Parses a persisted list.
pub fn decode_notes(raw: &str) -> serde_json::Result<Vec<Note>> {
    serde_json::from_str(raw)
}
