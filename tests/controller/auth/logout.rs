use axum::{http::StatusCode, response::IntoResponse};
use voyager::server::{controller::auth::logout, model::session::user::SessionUserId};
use voyager_test_utils::prelude::*;

use crate::util::log_in;

#[tokio::test]
/// Expect 307 temporary redirect to the login page after logout with a user ID in session
async fn returns_redirect_on_logout_with_user_id() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    log_in(&test.session, 1).await;

    let result = logout(test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get("location").unwrap(), "/login");

    // Ensure user was cleared from session
    let maybe_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(maybe_user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 307 temporary redirect after logout even without session data
async fn returns_redirect_on_logout_with_no_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}
