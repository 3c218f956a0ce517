//! HTTP controller endpoints for the Voyager web API.
//!
//! This module contains Axum handlers for authentication, trips and day regeneration.
//! Controllers validate CSRF headers and sessions, call into services and return
//! appropriate HTTP responses. Routes are documented for OpenAPI with utoipa.

pub mod auth;
pub mod trip;
pub mod util;
