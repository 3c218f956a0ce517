use axum::{extract::State, http::StatusCode, response::IntoResponse};
use voyager::{model::user::UserDto, server::controller::auth::get_user};
use voyager_test_utils::prelude::*;

use crate::util::{body_json, log_in};

#[tokio::test]
/// Expect 200 success with user information for the logged in user
async fn returns_success_for_logged_in_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await?;
    let user = test.user().insert_user("traveller").await?;
    log_in(&test.session, user.id).await;

    let result = get_user(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let dto: UserDto = body_json(resp).await;
    assert_eq!(dto.id, user.id);
    assert_eq!(dto.username, "traveller");

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when nobody is logged in
async fn returns_not_found_without_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_trip_tables().build().await?;

    let result = get_user(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a session user that no longer exists
async fn returns_not_found_for_deleted_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_trip_tables().build().await?;
    log_in(&test.session, 99).await;

    let result = get_user(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when required database tables dont exist
async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    log_in(&test.session, 1).await;

    let result = get_user(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
