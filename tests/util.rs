//! Helpers shared by controller integration tests.

use axum::{
    body::to_bytes,
    http::{HeaderMap, HeaderValue},
    response::Response,
};
use serde::de::DeserializeOwned;
use tower_sessions::Session;
use voyager::{
    model::api::{ErrorDto, CSRF_HEADER},
    server::model::session::{csrf::SessionCsrfToken, user::SessionUserId},
};

/// Headers carrying the session's CSRF token, minting one if needed.
pub async fn csrf_headers(session: &Session) -> HeaderMap {
    let token = SessionCsrfToken::get_or_create(session).await.unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(CSRF_HEADER, HeaderValue::from_str(&token).unwrap());
    headers
}

/// Store `user_id` in the session as a logged in user.
pub async fn log_in(session: &Session, user_id: i32) {
    SessionUserId::insert(session, user_id).await.unwrap();
}

pub async fn body_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn error_message(resp: Response) -> String {
    body_json::<ErrorDto>(resp).await.error
}
