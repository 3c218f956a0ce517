use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::trip::{ItineraryDayDto, TripDetailDto, TripDto},
    server::{
        data::{itinerary_day::ItineraryDayRepository, trip::TripRepository},
        error::{trip::TripError, Error},
        model::db::{ItineraryDayModel, TripModel},
    },
};

impl From<TripModel> for TripDto {
    fn from(trip: TripModel) -> Self {
        Self {
            id: trip.id,
            title: trip.title,
            num_days: trip.num_days,
            preferences: trip.preferences,
            created_at: trip.created_at,
        }
    }
}

impl From<ItineraryDayModel> for ItineraryDayDto {
    fn from(day: ItineraryDayModel) -> Self {
        Self {
            day_number: day.day_number,
            content: day.content,
            updated_at: day.updated_at,
        }
    }
}

/// Fetch a trip, failing unless it exists and belongs to `user_id`.
///
/// # Returns
/// - `Ok(TripModel)` - Trip owned by the user
/// - `Err(Error::TripError(TripError::NotFound))` - No trip with that ID
/// - `Err(Error::TripError(TripError::NotOwned))` - Trip belongs to another user
/// - `Err(Error::DbErr)` - Database error
pub async fn owned_trip<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    trip_id: i32,
) -> Result<TripModel, Error> {
    let Some(trip) = TripRepository::new(db).get_by_id(trip_id).await? else {
        return Err(TripError::NotFound(trip_id).into());
    };

    if trip.user_id != user_id {
        return Err(TripError::NotOwned { trip_id, user_id }.into());
    }

    Ok(trip)
}

pub struct TripService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TripService<'a> {
    /// Creates a new instance of [`TripService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the trips owned by a user, newest first
    pub async fn list_trips(&self, user_id: i32) -> Result<Vec<TripDto>, Error> {
        let trips = TripRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        Ok(trips.into_iter().map(TripDto::from).collect())
    }

    /// Gets a trip with its days ordered by day number
    pub async fn get_trip_detail(&self, user_id: i32, trip_id: i32) -> Result<TripDetailDto, Error> {
        let trip = owned_trip(self.db, user_id, trip_id).await?;
        let days = ItineraryDayRepository::new(self.db)
            .get_many_by_trip_id(trip.id)
            .await?;

        Ok(TripDetailDto {
            trip: trip.into(),
            days: days.into_iter().map(ItineraryDayDto::from).collect(),
        })
    }

    /// Deletes a trip and, through the cascade, its days
    pub async fn delete_trip(&self, user_id: i32, trip_id: i32) -> Result<(), Error> {
        let trip = owned_trip(self.db, user_id, trip_id).await?;

        TripRepository::new(self.db).delete(trip.id).await?;

        tracing::info!("User ID {} deleted trip ID {}", user_id, trip_id);

        Ok(())
    }
}
