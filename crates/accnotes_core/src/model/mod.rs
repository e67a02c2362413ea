//! Domain model for user-authored notes.
//!
//! # Invariants
//! - A note is exactly a `title`/`text` pair; neither field is validated.
//! - Note identity is its position in the owning list.

pub mod note;
