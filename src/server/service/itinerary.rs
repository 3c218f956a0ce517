//! Itinerary generation backed operations: trip creation and single day regeneration.

use std::collections::BTreeMap;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};
use validator::Validate;

use crate::{
    model::trip::{CreateTripDto, ItineraryDayDto, RegeneratedDayDto, TripDetailDto},
    server::{
        ai::{DayPlan, ItineraryGenerator},
        data::{itinerary_day::ItineraryDayRepository, trip::TripRepository},
        error::{trip::TripError, Error},
        service::trip::owned_trip,
    },
};

pub struct ItineraryService<'a, G: ItineraryGenerator> {
    db: &'a DatabaseConnection,
    generator: &'a G,
}

impl<'a, G: ItineraryGenerator> ItineraryService<'a, G> {
    /// Creates a new instance of [`ItineraryService`]
    pub fn new(db: &'a DatabaseConnection, generator: &'a G) -> Self {
        Self { db, generator }
    }

    /// Generate an itinerary and store it as a new trip.
    ///
    /// The generator runs before anything is written; the trip and all of its days are then
    /// inserted in one transaction. Generated days outside `1..=num_days` are dropped and a
    /// repeated day number keeps its first summary.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the new trip
    /// - `payload` - Destination, length and optional preferences
    ///
    /// # Returns
    /// - `Ok(TripDetailDto)` - The stored trip with its days
    /// - `Err(Error::TripError(TripError::InvalidInput))` - Payload failed validation
    /// - `Err(Error::AiError)` - Generation failed, nothing was stored
    /// - `Err(Error::DbErr)` - Database error, the transaction was rolled back
    pub async fn create_trip(
        &self,
        user_id: i32,
        payload: CreateTripDto,
    ) -> Result<TripDetailDto, Error> {
        payload.validate().map_err(TripError::from)?;

        let title = payload.title.trim();
        if title.is_empty() {
            return Err(TripError::InvalidInput("Destination is required".to_string()).into());
        }
        let preferences = payload
            .preferences
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty());

        let itinerary = self
            .generator
            .generate_itinerary(title, payload.num_days, preferences)
            .await?;
        let days = normalize_days(itinerary.days, payload.num_days);

        let txn = self.db.begin().await?;

        let trip = TripRepository::new(&txn)
            .create(user_id, title, payload.num_days, preferences)
            .await?;

        let day_repository = ItineraryDayRepository::new(&txn);
        let mut stored = Vec::with_capacity(days.len());
        for (day_number, summary) in days {
            stored.push(day_repository.create(trip.id, day_number, &summary).await?);
        }

        txn.commit().await?;

        tracing::info!(
            "User ID {} created trip ID {} to {} with {} days",
            user_id,
            trip.id,
            trip.title,
            stored.len()
        );

        Ok(TripDetailDto {
            trip: trip.into(),
            days: stored.into_iter().map(ItineraryDayDto::from).collect(),
        })
    }

    /// Replace the content of one day of a trip with a freshly generated plan.
    ///
    /// A day inside the trip's range without a stored row is created.
    ///
    /// # Returns
    /// - `Ok(RegeneratedDayDto)` - The day number and its new content
    /// - `Err(Error::TripError(TripError::NotFound))` - No trip with that ID
    /// - `Err(Error::TripError(TripError::NotOwned))` - Trip belongs to another user
    /// - `Err(Error::TripError(TripError::DayOutOfRange))` - Day outside `1..=num_days`
    /// - `Err(Error::AiError)` - Generation failed, the stored content is unchanged
    pub async fn regenerate_day(
        &self,
        user_id: i32,
        trip_id: i32,
        day: i32,
    ) -> Result<RegeneratedDayDto, Error> {
        let trip = owned_trip(self.db, user_id, trip_id).await?;

        if day < 1 || day > trip.num_days {
            return Err(TripError::DayOutOfRange {
                day,
                num_days: trip.num_days,
            }
            .into());
        }

        let plan = self
            .generator
            .regenerate_day(&trip.title, day, trip.num_days, trip.preferences.as_deref())
            .await?;

        let day_repository = ItineraryDayRepository::new(self.db);
        let updated = match day_repository
            .update_content(trip.id, day, &plan.summary)
            .await?
        {
            Some(updated) => updated,
            None => {
                tracing::warn!(
                    "Trip ID {} had no row for day {}, creating it",
                    trip.id,
                    day
                );
                day_repository.create(trip.id, day, &plan.summary).await?
            }
        };

        tracing::info!("User ID {} regenerated day {} of trip ID {}", user_id, day, trip.id);

        Ok(RegeneratedDayDto {
            day: updated.day_number,
            content: updated.content,
        })
    }
}

/// Keep days within `1..=num_days`, first summary wins, ordered by day number.
fn normalize_days(days: Vec<DayPlan>, num_days: i32) -> BTreeMap<i32, String> {
    let mut normalized = BTreeMap::new();

    for plan in days {
        if plan.day < 1 || plan.day > num_days {
            tracing::warn!(
                "Dropping generated day {} outside of 1..={}",
                plan.day,
                num_days
            );
            continue;
        }

        normalized.entry(plan.day).or_insert(plan.summary);
    }

    normalized
}
