//! Service layer for business logic.
//!
//! Services coordinate repositories and the itinerary generator. They own validation that needs
//! the database (duplicate usernames, trip ownership, day ranges) and the transaction around
//! trip creation.

pub mod auth;
pub mod itinerary;
pub mod trip;
pub mod user;
