use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use voyager::{
    model::{api::CSRF_HEADER, user::LoginDto},
    server::{controller::auth::login, model::session::user::SessionUserId},
};
use voyager_test_utils::prelude::*;

use crate::util::{csrf_headers, error_message};

fn payload(username: &str, password: &str) -> Json<LoginDto> {
    Json(LoginDto {
        username: username.to_string(),
        password: password.to_string(),
    })
}

#[tokio::test]
/// Expect 200 success and the user ID stored in session
async fn logs_in_with_valid_credentials() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_trip_tables()
        .with_user("traveller")
        .build()
        .await?;
    let user = test.user().find_user("traveller").await?.unwrap();
    let headers = csrf_headers(&test.session).await;

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        headers,
        payload("traveller", TEST_PASSWORD),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), Some(user.id));

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized for a wrong password and no user in session
async fn rejects_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_trip_tables()
        .with_user("traveller")
        .build()
        .await?;
    let headers = csrf_headers(&test.session).await;

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        headers,
        payload("traveller", "not-the-password"),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        error_message(resp).await,
        "Invalid username or password. Please try again."
    );
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden for a CSRF header that does not match the session
async fn rejects_mismatched_csrf() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_trip_tables()
        .with_user("traveller")
        .build()
        .await?;
    let _ = csrf_headers(&test.session).await;

    let mut headers = HeaderMap::new();
    headers.insert(CSRF_HEADER, HeaderValue::from_static("forged-token"));

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        headers,
        payload("traveller", TEST_PASSWORD),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

    Ok(())
}
