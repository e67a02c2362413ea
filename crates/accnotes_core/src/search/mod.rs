//! Note search entry points.
//!
//! # Responsibility
//! - Derive filtered, read-only views over the in-memory note list.
//! - Keep matching rules inside core.

pub mod filter;
