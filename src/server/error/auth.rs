use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Username {0:?} is already taken")]
    UsernameTaken(String),
    #[error("CSRF token missing from request or session")]
    CsrfMissing,
    #[error("CSRF token does not match the session token")]
    CsrfValidationFailed,
    #[error("Failed to hash or verify password: {0}")]
    PasswordHash(String),
}

impl AuthError {
    fn error_response(status: StatusCode, message: &str) -> Response {
        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Self::error_response(StatusCode::UNAUTHORIZED, "Please log in to continue.")
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                Self::error_response(StatusCode::UNAUTHORIZED, "Please log in to continue.")
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                Self::error_response(
                    StatusCode::UNAUTHORIZED,
                    "Invalid username or password. Please try again.",
                )
            }
            Self::UsernameTaken(_) => {
                tracing::debug!("{}", self);

                Self::error_response(
                    StatusCode::CONFLICT,
                    "Username already exists. Please choose a different username.",
                )
            }
            Self::CsrfMissing | Self::CsrfValidationFailed => {
                tracing::debug!("{}", self);

                Self::error_response(
                    StatusCode::FORBIDDEN,
                    "The CSRF token is missing or invalid.",
                )
            }
            Self::PasswordHash(_) => InternalServerError(self).into_response(),
        }
    }
}
