use axum::{extract::State, http::StatusCode, response::IntoResponse};
use voyager::{model::trip::TripDto, server::controller::trip::list_trips};
use voyager_test_utils::prelude::*;

use crate::util::{body_json, log_in};

#[tokio::test]
/// Expect 200 success with only the user's trips
async fn lists_own_trips() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await?;
    let (user, trip, _) = test.trip().insert_user_with_trip("owner", 2).await?;
    let other = test.user().insert_user("other").await?;
    test.trip().insert_trip(other.id, "Elsewhere", 1).await?;
    log_in(&test.session, user.id).await;

    let result = list_trips(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let trips: Vec<TripDto> = body_json(resp).await;
    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].id, trip.id);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized without a logged in user
async fn returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_trip_tables().build().await?;

    let result = list_trips(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
