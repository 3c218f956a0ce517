use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use voyager::{
    model::user::{RegisterDto, UserDto},
    server::controller::auth::register,
};
use voyager_test_utils::prelude::*;

use crate::util::{body_json, csrf_headers, error_message};

fn payload(username: &str, password: &str) -> Json<RegisterDto> {
    Json(RegisterDto {
        username: username.to_string(),
        password: password.to_string(),
    })
}

#[tokio::test]
/// Expect 201 created with the new user
async fn returns_created_for_new_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await?;
    let headers = csrf_headers(&test.session).await;

    let result = register(
        State(test.to_app_state()),
        test.session.clone(),
        headers,
        payload("traveller", "s3cret!"),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: UserDto = body_json(resp).await;
    assert_eq!(user.username, "traveller");
    assert!(test.user().find_user("traveller").await?.is_some());

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict for an existing username
async fn returns_conflict_for_taken_username() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_trip_tables()
        .with_user("traveller")
        .build()
        .await?;
    let headers = csrf_headers(&test.session).await;

    let result = register(
        State(test.to_app_state()),
        test.session.clone(),
        headers,
        payload("traveller", "s3cret!"),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(
        error_message(resp).await,
        "Username already exists. Please choose a different username."
    );

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for a username that is too short
async fn returns_bad_request_for_short_username() -> Result<(), TestError> {
    let test = TestBuilder::new().with_trip_tables().build().await?;
    let headers = csrf_headers(&test.session).await;

    let result = register(
        State(test.to_app_state()),
        test.session.clone(),
        headers,
        payload("ab", "s3cret!"),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(resp).await,
        "Username must be between 3 and 50 characters"
    );

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden without a CSRF header
async fn returns_forbidden_without_csrf() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await?;

    let result = register(
        State(test.to_app_state()),
        test.session.clone(),
        HeaderMap::new(),
        payload("traveller", "s3cret!"),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(test.user().find_user("traveller").await?.is_none());

    Ok(())
}
