//! Flutter-facing bindings for Accessible Notes core.

pub mod api;
