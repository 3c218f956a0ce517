use axum::http::HeaderMap;
use tower_sessions::Session;

use crate::{
    model::api::CSRF_HEADER,
    server::{
        error::{auth::AuthError, Error},
        model::session::csrf::SessionCsrfToken,
    },
};

/// Validate that the request's `X-CSRFToken` header matches the session's CSRF token.
///
/// The session token is kept so it can be reused for later requests.
///
/// # Returns
/// - `Ok(())` - Header present and equal to the session token
/// - `Err(Error::AuthError(AuthError::CsrfMissing))` - Header or session token absent
/// - `Err(Error::AuthError(AuthError::CsrfValidationFailed))` - Tokens differ
pub async fn validate_csrf(session: &Session, headers: &HeaderMap) -> Result<(), Error> {
    let Some(header_token) = headers
        .get(CSRF_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
    else {
        return Err(AuthError::CsrfMissing.into());
    };

    let Some(session_token) = SessionCsrfToken::get(session).await? else {
        return Err(AuthError::CsrfMissing.into());
    };

    if session_token != header_token {
        return Err(AuthError::CsrfValidationFailed.into());
    }

    Ok(())
}
