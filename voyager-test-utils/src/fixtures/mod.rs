//! Test fixture modules for database and HTTP mock creation.
//!
//! Each submodule provides fixtures for a different part of the system:
//!
//! - `ai` - Mock OpenAI Responses API endpoints and reply bodies
//! - `trip` - Trip and itinerary day records
//! - `user` - User accounts hashed with the standard test password

pub mod ai;
pub mod trip;
pub mod user;
