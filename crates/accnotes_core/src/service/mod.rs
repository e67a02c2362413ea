//! Core use-case services.
//!
//! # Responsibility
//! - Own the canonical note list and its persistence round-trip.
//! - Drive the single-screen edit flow on top of the note store.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod alerts;
pub mod edit_session;
pub mod note_store;
pub mod notes_screen;
