use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Longest trip a user may request.
pub const MAX_TRIP_DAYS: i32 = 30;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TripDto {
    pub id: i32,
    pub title: String,
    pub num_days: i32,
    pub preferences: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ItineraryDayDto {
    pub day_number: i32,
    pub content: String,
    pub updated_at: NaiveDateTime,
}

/// A trip together with its days ordered by day number
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TripDetailDto {
    pub trip: TripDto,
    pub days: Vec<ItineraryDayDto>,
}

/// New trip form
///
/// `title` is the destination handed to the itinerary generator.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateTripDto {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Destination must be between 1 and 100 characters"
    ))]
    pub title: String,
    #[validate(range(min = 1, max = MAX_TRIP_DAYS, message = "Trip must be between 1 and 30 days"))]
    pub num_days: i32,
    #[serde(default)]
    pub preferences: Option<String>,
}

/// Body returned by the day regeneration endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RegeneratedDayDto {
    pub day: i32,
    pub content: String,
}
