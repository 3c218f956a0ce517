use axum::{http::StatusCode, response::IntoResponse};
use voyager::{
    model::api::CsrfTokenDto,
    server::{controller::auth::csrf, model::session::csrf::SessionCsrfToken},
};
use voyager_test_utils::prelude::*;

use crate::util::body_json;

#[tokio::test]
/// Expect the same token on repeated requests within one session
async fn returns_stable_token_for_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let first = csrf(test.session.clone()).await.unwrap().into_response();
    assert_eq!(first.status(), StatusCode::OK);
    let first: CsrfTokenDto = body_json(first).await;

    let second: CsrfTokenDto = body_json(csrf(test.session.clone()).await.unwrap().into_response()).await;

    assert!(!first.csrf_token.is_empty());
    assert_eq!(first.csrf_token, second.csrf_token);
    assert_eq!(
        SessionCsrfToken::get(&test.session).await.unwrap(),
        Some(first.csrf_token)
    );

    Ok(())
}
