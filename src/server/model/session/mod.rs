//! Session data models and utilities.
//!
//! Type-safe wrappers for values stored in the tower-sessions session (Redis-backed in
//! production, in-memory in tests). Each submodule owns one namespaced key.

pub mod csrf;
pub mod user;
