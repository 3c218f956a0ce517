use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        trip::{CreateTripDto, RegeneratedDayDto, TripDetailDto, TripDto},
    },
    server::{
        controller::util::{csrf::validate_csrf, get_user::get_user_from_session},
        error::Error,
        model::app::AppState,
        service::{itinerary::ItineraryService, trip::TripService},
    },
};

pub static TRIP_TAG: &str = "trip";

/// List the logged in user's trips, newest first
#[utoipa::path(
    get,
    path = "/api/trips",
    tag = TRIP_TAG,
    responses(
        (status = 200, description = "Trips owned by the user", body = Vec<TripDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_trips(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let trips = TripService::new(&state.db).list_trips(user.id).await?;

    Ok((StatusCode::OK, Json(trips)))
}

/// Generate an itinerary and store it as a new trip
#[utoipa::path(
    post,
    path = "/api/trips",
    tag = TRIP_TAG,
    request_body = CreateTripDto,
    responses(
        (status = 201, description = "Trip created with its generated days", body = TripDetailDto),
        (status = 400, description = "Invalid destination or day count", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "CSRF token missing or invalid", body = ErrorDto),
        (status = 500, description = "Itinerary generation or database failure", body = ErrorDto)
    ),
)]
pub async fn create_trip(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Json(payload): Json<CreateTripDto>,
) -> Result<impl IntoResponse, Error> {
    validate_csrf(&session, &headers).await?;
    let user = get_user_from_session(&state, &session).await?;

    let trip = ItineraryService::new(&state.db, &state.ai_client)
        .create_trip(user.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(trip)))
}

/// Get a trip with its itinerary days
#[utoipa::path(
    get,
    path = "/api/trips/{trip_id}",
    tag = TRIP_TAG,
    params(("trip_id" = i32, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Trip and days ordered by day number", body = TripDetailDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Trip belongs to another user", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trip(
    State(state): State<AppState>,
    session: Session,
    Path(trip_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let trip = TripService::new(&state.db)
        .get_trip_detail(user.id, trip_id)
        .await?;

    Ok((StatusCode::OK, Json(trip)))
}

/// Delete a trip and its itinerary days
#[utoipa::path(
    delete,
    path = "/api/trips/{trip_id}",
    tag = TRIP_TAG,
    params(("trip_id" = i32, Path, description = "Trip ID")),
    responses(
        (status = 204, description = "Trip deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "CSRF token invalid or trip belongs to another user", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_trip(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(trip_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    validate_csrf(&session, &headers).await?;
    let user = get_user_from_session(&state, &session).await?;

    TripService::new(&state.db)
        .delete_trip(user.id, trip_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Regenerate the itinerary of a single day
///
/// Replaces only the requested day's content; other days are untouched.
#[utoipa::path(
    post,
    path = "/trip/{trip_id}/day/{day}/regenerate",
    tag = TRIP_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID"),
        ("day" = i32, Path, description = "Day number within the trip, starting at 1")
    ),
    responses(
        (status = 200, description = "Day regenerated", body = RegeneratedDayDto),
        (status = 400, description = "Invalid day number", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "CSRF token invalid or trip belongs to another user", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Itinerary generation or database failure", body = ErrorDto)
    ),
)]
pub async fn regenerate_day(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path((trip_id, day)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    validate_csrf(&session, &headers).await?;
    let user = get_user_from_session(&state, &session).await?;

    let regenerated = ItineraryService::new(&state.db, &state.ai_client)
        .regenerate_day(user.id, trip_id, day)
        .await?;

    Ok((StatusCode::OK, Json(regenerated)))
}
