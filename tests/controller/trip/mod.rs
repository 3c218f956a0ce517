//! Tests for trip controller endpoints.
//!
//! Covers listing, creating, viewing and deleting trips as well as single day regeneration,
//! including session, ownership and CSRF checks.

mod create;
mod delete;
mod get;
mod list;
mod regenerate;
