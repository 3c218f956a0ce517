use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Failures talking to or interpreting the itinerary generator.
#[derive(Error, Debug)]
pub enum AiError {
    #[error("AI request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("AI service responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("AI reply did not contain any output text")]
    EmptyOutput,
    #[error("AI reply is not valid JSON: {0}")]
    MalformedReply(String),
    #[error("AI reply is missing required field {0:?}")]
    MissingField(&'static str),
}

impl IntoResponse for AiError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
