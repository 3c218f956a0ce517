use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::validation_message};

#[derive(Error, Debug)]
pub enum TripError {
    #[error("Trip ID {0:?} not found")]
    NotFound(i32),
    #[error("Trip ID {trip_id:?} is not owned by user ID {user_id:?}")]
    NotOwned { trip_id: i32, user_id: i32 },
    #[error("Day {day:?} is outside of 1..={num_days:?}")]
    DayOutOfRange { day: i32, num_days: i32 },
    #[error("Invalid trip input: {0}")]
    InvalidInput(String),
}

impl IntoResponse for TripError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "Trip not found".to_string()),
            Self::NotOwned { .. } => (StatusCode::FORBIDDEN, "Unauthorized".to_string()),
            Self::DayOutOfRange { .. } => {
                (StatusCode::BAD_REQUEST, "Invalid day number".to_string())
            }
            Self::InvalidInput(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
        };

        tracing::debug!("{}", self);

        (status, Json(ErrorDto { error: message })).into_response()
    }
}

impl From<validator::ValidationErrors> for TripError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::InvalidInput(validation_message(&errors))
    }
}
