//! Error types for the Voyager server application.
//!
//! Each domain (authentication, configuration, trips, AI generation) has its own error enum
//! implementing `IntoResponse`. The [`Error`] enum aggregates them together with external
//! library errors so handlers can use `?` throughout and return `Result<_, Error>`.

pub mod ai;
pub mod auth;
pub mod config;
pub mod trip;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{ai::AiError, auth::AuthError, config::ConfigError, trip::TripError},
};

/// Main error type for the Voyager server application.
///
/// Uses `thiserror`'s `#[from]` attribute so the `?` operator converts domain and library
/// errors automatically. The `IntoResponse` implementation maps each error to an HTTP
/// response with an [`ErrorDto`] body.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (session, CSRF, credentials)
/// - Trip errors (missing trip, ownership, day range, invalid input)
/// - AI errors (itinerary generation failures)
/// - Request validation errors
/// - External library errors (database, sessions)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, CSRF, credentials).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Trip lookup, ownership or input error.
    #[error(transparent)]
    TripError(#[from] TripError),
    /// Itinerary generation error.
    #[error(transparent)]
    AiError(#[from] AiError),
    /// Request body failed validation.
    #[error("Validation failed: {}", validation_message(.0))]
    ValidationError(#[from] validator::ValidationErrors),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures, day out of range
/// - 401 Unauthorized - Not logged in, invalid credentials
/// - 403 Forbidden - CSRF failures, trips owned by another user
/// - 404 Not Found - Missing trips
/// - 409 Conflict - Username already taken
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::TripError(err) => err.into_response(),
            Self::AiError(err) => err.into_response(),
            Self::ValidationError(errors) => {
                let message = validation_message(&errors);
                tracing::debug!("Request validation failed: {}", message);

                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Flatten validation errors into the messages declared on the DTO fields, sorted for stable
/// output.
pub fn validation_message(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("Invalid value for {}", field),
            })
        })
        .collect();
    messages.sort();

    messages.join(", ")
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
