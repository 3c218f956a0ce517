//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for one table each. They are generic over
//! `ConnectionTrait` so the same code runs against a pooled connection or inside a
//! transaction.

pub mod itinerary_day;
pub mod trip;
pub mod user;
