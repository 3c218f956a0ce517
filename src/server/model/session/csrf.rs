//! CSRF token session data.
//!
//! One random token is minted per session and handed to the client through
//! `GET /api/auth/csrf`. Mutating requests echo it back in the `X-CSRFToken` header, where it
//! is compared against the stored value.

use rand::{distr::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key for the CSRF token, namespaced under "voyager:auth:".
pub const SESSION_AUTH_CSRF_KEY: &str = "voyager:auth:csrf";

/// Length of generated CSRF tokens.
pub const CSRF_TOKEN_LENGTH: usize = 48;

/// Session wrapper for the CSRF token.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionCsrfToken(pub String);

impl SessionCsrfToken {
    /// Inserts a CSRF token into the session, replacing any previous token.
    ///
    /// # Arguments
    /// - `session` - User's session for storing the CSRF token
    /// - `token` - CSRF token to store
    ///
    /// # Returns
    /// - `Ok(())` - CSRF token stored in session
    /// - `Err(Error)` - Session storage failed (Redis error, serialization error)
    pub async fn insert(session: &Session, token: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_CSRF_KEY, SessionCsrfToken(token.to_string()))
            .await?;

        Ok(())
    }

    /// Retrieves the CSRF token from the session without removing it.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - Token present
    /// - `Ok(None)` - No token minted for this session yet
    /// - `Err(Error)` - Session retrieval failed
    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .get::<SessionCsrfToken>(SESSION_AUTH_CSRF_KEY)
            .await?
            .map(|SessionCsrfToken(token)| token))
    }

    /// Returns the session's CSRF token, minting and storing a new one when absent.
    pub async fn get_or_create(session: &Session) -> Result<String, Error> {
        if let Some(token) = Self::get(session).await? {
            return Ok(token);
        }

        let token = generate_token();
        Self::insert(session, &token).await?;

        Ok(token)
    }
}

/// Generate a random alphanumeric CSRF token.
pub fn generate_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CSRF_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}
