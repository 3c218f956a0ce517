use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
};
use voyager::{
    model::{api::CSRF_HEADER, trip::RegeneratedDayDto},
    server::{controller::trip::regenerate_day, data::itinerary_day::ItineraryDayRepository},
};
use voyager_test_utils::prelude::*;

use crate::util::{body_json, csrf_headers, error_message, log_in};

#[tokio::test]
/// Expect 200 success with the persisted content, other days untouched
async fn regenerates_requested_day() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_trip_tables()
        .with_day_endpoint(3, "New plan text", 1)
        .build()
        .await?;
    let (user, trip, _) = test.trip().insert_user_with_trip("owner", 3).await?;
    log_in(&test.session, user.id).await;
    let headers = csrf_headers(&test.session).await;

    let result = regenerate_day(
        State(test.to_app_state()),
        test.session.clone(),
        headers,
        Path((trip.id, 3)),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: RegeneratedDayDto = body_json(resp).await;
    assert_eq!(
        body,
        RegeneratedDayDto {
            day: 3,
            content: "New plan text".to_string()
        }
    );

    let days = ItineraryDayRepository::new(&test.db)
        .get_many_by_trip_id(trip.id)
        .await?;
    assert_eq!(days[0].content, "Day 1 plan");
    assert_eq!(days[1].content, "Day 2 plan");
    assert_eq!(days[2].content, "New plan text");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized without a logged in user
async fn returns_unauthorized_without_session() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_trip_tables()
        .with_day_endpoint(1, "unused", 0)
        .build()
        .await?;
    let (_, trip, _) = test.trip().insert_user_with_trip("owner", 2).await?;
    let headers = csrf_headers(&test.session).await;

    let result = regenerate_day(
        State(test.to_app_state()),
        test.session.clone(),
        headers,
        Path((trip.id, 1)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden for another user's trip
async fn returns_forbidden_for_other_users_trip() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_trip_tables()
        .with_day_endpoint(1, "unused", 0)
        .build()
        .await?;
    let (_, trip, _) = test.trip().insert_user_with_trip("owner", 2).await?;
    let intruder = test.user().insert_user("intruder").await?;
    log_in(&test.session, intruder.id).await;
    let headers = csrf_headers(&test.session).await;

    let result = regenerate_day(
        State(test.to_app_state()),
        test.session.clone(),
        headers,
        Path((trip.id, 1)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(error_message(resp).await, "Unauthorized");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a trip that does not exist
async fn returns_not_found_for_missing_trip() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await?;
    let user = test.user().insert_user("owner").await?;
    log_in(&test.session, user.id).await;
    let headers = csrf_headers(&test.session).await;

    let result = regenerate_day(
        State(test.to_app_state()),
        test.session.clone(),
        headers,
        Path((42, 3)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(resp).await, "Trip not found");

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for a day outside the trip
async fn returns_bad_request_for_invalid_day() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_trip_tables()
        .with_day_endpoint(4, "unused", 0)
        .build()
        .await?;
    let (user, trip, _) = test.trip().insert_user_with_trip("owner", 3).await?;
    log_in(&test.session, user.id).await;
    let headers = csrf_headers(&test.session).await;

    let result = regenerate_day(
        State(test.to_app_state()),
        test.session.clone(),
        headers,
        Path((trip.id, 4)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(resp).await, "Invalid day number");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden for a mismatched CSRF token, content unchanged
async fn returns_forbidden_for_csrf_mismatch() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_trip_tables()
        .with_day_endpoint(1, "unused", 0)
        .build()
        .await?;
    let (user, trip, _) = test.trip().insert_user_with_trip("owner", 2).await?;
    log_in(&test.session, user.id).await;
    let _ = csrf_headers(&test.session).await;

    let mut headers = HeaderMap::new();
    headers.insert(CSRF_HEADER, HeaderValue::from_static("forged-token"));

    let result = regenerate_day(
        State(test.to_app_state()),
        test.session.clone(),
        headers,
        Path((trip.id, 1)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let days = ItineraryDayRepository::new(&test.db)
        .get_many_by_trip_id(trip.id)
        .await?;
    assert_eq!(days[0].content, "Day 1 plan");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when the generator fails, content unchanged
async fn returns_internal_error_when_generation_fails() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await?;
    let (user, trip, _) = test.trip().insert_user_with_trip("owner", 2).await?;
    let mock = test.ai().create_error_endpoint(502, 1);
    log_in(&test.session, user.id).await;
    let headers = csrf_headers(&test.session).await;

    let result = regenerate_day(
        State(test.to_app_state()),
        test.session.clone(),
        headers,
        Path((trip.id, 2)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let days = ItineraryDayRepository::new(&test.db)
        .get_many_by_trip_id(trip.id)
        .await?;
    assert_eq!(days[1].content, "Day 2 plan");
    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error for an empty generated summary, content unchanged
async fn returns_internal_error_for_empty_summary() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_trip_tables()
        .with_day_endpoint(2, "", 1)
        .build()
        .await?;
    let (user, trip, _) = test.trip().insert_user_with_trip("owner", 2).await?;
    log_in(&test.session, user.id).await;
    let headers = csrf_headers(&test.session).await;

    let result = regenerate_day(
        State(test.to_app_state()),
        test.session.clone(),
        headers,
        Path((trip.id, 2)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let days = ItineraryDayRepository::new(&test.db)
        .get_many_by_trip_id(trip.id)
        .await?;
    assert_eq!(days[1].content, "Day 2 plan");
    test.assert_mocks();

    Ok(())
}
