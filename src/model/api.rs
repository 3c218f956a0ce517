use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// CSRF token bound to the caller's session
///
/// Sent back on every mutating request in the `X-CSRFToken` header.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CsrfTokenDto {
    pub csrf_token: String,
}

/// Header carrying the session CSRF token on mutating requests.
pub static CSRF_HEADER: &str = "X-CSRFToken";
