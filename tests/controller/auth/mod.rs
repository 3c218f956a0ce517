//! Tests for authentication controller endpoints.
//!
//! This module contains integration tests for authentication-related HTTP endpoints,
//! including the CSRF token, registration, login, logout, and user information retrieval.

mod csrf;
mod login;
mod logout;
mod register;
mod user;
