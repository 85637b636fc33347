//! Data models
//!
//! Shared between employee-server and its clients (via API).
//! Field names on the wire are camelCase; the store id is exposed as `_id`.

pub mod employee;
pub mod serde_helpers;

// Re-exports
pub use employee::*;
