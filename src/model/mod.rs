//! Data transfer objects shared by the server API and the web client.

pub mod api;
pub mod trip;
pub mod user;
