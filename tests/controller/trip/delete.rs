use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use voyager::server::{controller::trip::delete_trip, data::trip::TripRepository};
use voyager_test_utils::prelude::*;

use crate::util::{csrf_headers, log_in};

#[tokio::test]
/// Expect 204 no content and the trip removed
async fn deletes_own_trip() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await?;
    let (user, trip, _) = test.trip().insert_user_with_trip("owner", 2).await?;
    log_in(&test.session, user.id).await;
    let headers = csrf_headers(&test.session).await;

    let result = delete_trip(
        State(test.to_app_state()),
        test.session.clone(),
        headers,
        Path(trip.id),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(TripRepository::new(&test.db)
        .get_by_id(trip.id)
        .await?
        .is_none());

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden without a CSRF header, trip kept
async fn returns_forbidden_without_csrf() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await?;
    let (user, trip, _) = test.trip().insert_user_with_trip("owner", 2).await?;
    log_in(&test.session, user.id).await;

    let result = delete_trip(
        State(test.to_app_state()),
        test.session.clone(),
        HeaderMap::new(),
        Path(trip.id),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(TripRepository::new(&test.db)
        .get_by_id(trip.id)
        .await?
        .is_some());

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a trip that does not exist
async fn returns_not_found_for_missing_trip() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await?;
    let user = test.user().insert_user("owner").await?;
    log_in(&test.session, user.id).await;
    let headers = csrf_headers(&test.session).await;

    let result = delete_trip(
        State(test.to_app_state()),
        test.session.clone(),
        headers,
        Path(12),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
