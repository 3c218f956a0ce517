//! Server application core modules.
//!
//! This module contains all server-side functionality for the Voyager application, including
//! HTTP routing, authentication, database operations and AI itinerary generation. It provides
//! the backend for managing user accounts, trips and per-day regeneration.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ai;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
