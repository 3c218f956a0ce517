use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use voyager::{
    model::trip::{CreateTripDto, TripDetailDto},
    server::{controller::trip::create_trip, data::trip::TripRepository},
};
use voyager_test_utils::prelude::*;

use crate::util::{body_json, csrf_headers, error_message, log_in};

fn payload(title: &str, num_days: i32) -> Json<CreateTripDto> {
    Json(CreateTripDto {
        title: title.to_string(),
        num_days,
        preferences: None,
    })
}

#[tokio::test]
/// Expect 201 created with one stored day per generated day
async fn creates_trip_from_generated_itinerary() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_trip_tables()
        .with_itinerary_endpoint(vec!["Gion", "Arashiyama"], 1)
        .build()
        .await?;
    let user = test.user().insert_user("traveller").await?;
    log_in(&test.session, user.id).await;
    let headers = csrf_headers(&test.session).await;

    let result = create_trip(
        State(test.to_app_state()),
        test.session.clone(),
        headers,
        payload("Kyoto", 2),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let detail: TripDetailDto = body_json(resp).await;
    assert_eq!(detail.trip.title, "Kyoto");
    assert_eq!(detail.trip.num_days, 2);
    assert_eq!(detail.days[0].content, "Gion");
    assert_eq!(detail.days[1].content, "Arashiyama");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for a zero day trip without calling the generator
async fn returns_bad_request_for_zero_days() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_trip_tables()
        .with_itinerary_endpoint(vec!["unused"], 0)
        .build()
        .await?;
    let user = test.user().insert_user("traveller").await?;
    log_in(&test.session, user.id).await;
    let headers = csrf_headers(&test.session).await;

    let result = create_trip(
        State(test.to_app_state()),
        test.session.clone(),
        headers,
        payload("Kyoto", 0),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(resp).await,
        "Trip must be between 1 and 30 days"
    );
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error and no trip when the generator fails
async fn returns_internal_error_when_generation_fails() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await?;
    let user = test.user().insert_user("traveller").await?;
    let mock = test.ai().create_error_endpoint(500, 1);
    log_in(&test.session, user.id).await;
    let headers = csrf_headers(&test.session).await;

    let result = create_trip(
        State(test.to_app_state()),
        test.session.clone(),
        headers,
        payload("Kyoto", 2),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(TripRepository::new(&test.db)
        .get_many_by_user_id(user.id)
        .await?
        .is_empty());
    mock.assert();

    Ok(())
}
