use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use voyager::{model::trip::TripDetailDto, server::controller::trip::get_trip};
use voyager_test_utils::prelude::*;

use crate::util::{body_json, error_message, log_in};

#[tokio::test]
/// Expect 200 success with days ordered by day number
async fn returns_trip_with_days() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await?;
    let (user, trip, _) = test.trip().insert_user_with_trip("owner", 3).await?;
    log_in(&test.session, user.id).await;

    let result = get_trip(State(test.to_app_state()), test.session.clone(), Path(trip.id)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let detail: TripDetailDto = body_json(resp).await;
    assert_eq!(detail.trip.title, "Test Trip");
    let numbers: Vec<i32> = detail.days.iter().map(|d| d.day_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a trip that does not exist
async fn returns_not_found_for_missing_trip() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await?;
    let user = test.user().insert_user("owner").await?;
    log_in(&test.session, user.id).await;

    let result = get_trip(State(test.to_app_state()), test.session.clone(), Path(404)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(resp).await, "Trip not found");

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden for another user's trip
async fn returns_forbidden_for_other_users_trip() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await?;
    let (_, trip, _) = test.trip().insert_user_with_trip("owner", 1).await?;
    let intruder = test.user().insert_user("intruder").await?;
    log_in(&test.session, intruder.id).await;

    let result = get_trip(State(test.to_app_state()), test.session.clone(), Path(trip.id)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(error_message(resp).await, "Unauthorized");

    Ok(())
}
