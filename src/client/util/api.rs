//! JSON API calls made from the browser.
//!
//! Every request includes credentials so the session cookie is sent; mutating requests carry
//! the CSRF token in the `X-CSRFToken` header.

use reqwasm::http::{Request, RequestCredentials, Response};
use serde::{de::DeserializeOwned, Serialize};
use voyager::model::{
    api::{CsrfTokenDto, ErrorDto, CSRF_HEADER},
    trip::{CreateTripDto, TripDetailDto, TripDto},
    user::{LoginDto, RegisterDto, UserDto},
};

/// Turn a failed response into a message, preferring the server's `ErrorDto`.
async fn error_message(response: Response) -> String {
    let status = response.status();

    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        error_dto.error
    } else {
        format!("Request failed with status {}", status)
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

async fn send_get(url: &str) -> Result<Response, String> {
    Request::get(url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))
}

async fn send_json<B: Serialize>(
    url: &str,
    csrf_token: &str,
    body: &B,
) -> Result<Response, String> {
    let body =
        serde_json::to_string(body).map_err(|e| format!("Failed to encode request: {}", e))?;

    Request::post(url)
        .header("Content-Type", "application/json")
        .header(CSRF_HEADER, csrf_token)
        .body(body)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))
}

/// Retrieve the session's CSRF token
pub async fn get_csrf_token() -> Result<String, String> {
    let response = send_get("/api/auth/csrf").await?;

    match response.status() {
        200 => Ok(parse_json::<CsrfTokenDto>(response).await?.csrf_token),
        _ => Err(error_message(response).await),
    }
}

/// Retrieve the logged in user, `None` when logged out
pub async fn get_user() -> Result<Option<UserDto>, String> {
    let response = send_get("/api/auth/user").await?;

    match response.status() {
        200 => Ok(Some(parse_json(response).await?)),
        404 => Ok(None),
        _ => Err(error_message(response).await),
    }
}

pub async fn register(csrf_token: &str, payload: &RegisterDto) -> Result<UserDto, String> {
    let response = send_json("/api/auth/register", csrf_token, payload).await?;

    match response.status() {
        201 => parse_json(response).await,
        _ => Err(error_message(response).await),
    }
}

pub async fn login(csrf_token: &str, payload: &LoginDto) -> Result<UserDto, String> {
    let response = send_json("/api/auth/login", csrf_token, payload).await?;

    match response.status() {
        200 => parse_json(response).await,
        _ => Err(error_message(response).await),
    }
}

pub async fn list_trips() -> Result<Vec<TripDto>, String> {
    let response = send_get("/api/trips").await?;

    match response.status() {
        200 => parse_json(response).await,
        _ => Err(error_message(response).await),
    }
}

pub async fn create_trip(csrf_token: &str, payload: &CreateTripDto) -> Result<TripDetailDto, String> {
    let response = send_json("/api/trips", csrf_token, payload).await?;

    match response.status() {
        201 => parse_json(response).await,
        _ => Err(error_message(response).await),
    }
}

pub async fn get_trip(trip_id: i32) -> Result<TripDetailDto, String> {
    let response = send_get(&format!("/api/trips/{}", trip_id)).await?;

    match response.status() {
        200 => parse_json(response).await,
        _ => Err(error_message(response).await),
    }
}

pub async fn delete_trip(csrf_token: &str, trip_id: i32) -> Result<(), String> {
    let response = Request::delete(&format!("/api/trips/{}", trip_id))
        .header(CSRF_HEADER, csrf_token)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        204 => Ok(()),
        _ => Err(error_message(response).await),
    }
}
