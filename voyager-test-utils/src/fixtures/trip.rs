//! Trip and itinerary day fixtures.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{ItineraryDayModel, TripModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn trip<'a>(&'a mut self) -> TripFixtures<'a> {
        TripFixtures { setup: self }
    }
}

pub struct TripFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> TripFixtures<'a> {
    /// Insert a trip without any itinerary days.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the trip
    /// - `title` - Trip title
    /// - `num_days` - Declared trip length
    ///
    /// # Returns
    /// - `Ok(TripModel)` - The inserted trip
    /// - `Err(TestError::DbErr)` - Insert failed, for example on a missing owner
    pub async fn insert_trip(
        &self,
        user_id: i32,
        title: &str,
        num_days: i32,
    ) -> Result<TripModel, TestError> {
        Ok(entity::prelude::Trip::insert(entity::trip::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(title.to_string()),
            num_days: ActiveValue::Set(num_days),
            preferences: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a single itinerary day for a trip.
    pub async fn insert_day(
        &self,
        trip_id: i32,
        day_number: i32,
        content: &str,
    ) -> Result<ItineraryDayModel, TestError> {
        Ok(
            entity::prelude::ItineraryDay::insert(entity::itinerary_day::ActiveModel {
                trip_id: ActiveValue::Set(trip_id),
                day_number: ActiveValue::Set(day_number),
                content: ActiveValue::Set(content.to_string()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a trip titled "Test Trip" with `num_days` days whose content is `Day N plan`.
    pub async fn insert_trip_with_days(
        &self,
        user_id: i32,
        num_days: i32,
    ) -> Result<(TripModel, Vec<ItineraryDayModel>), TestError> {
        let trip = self.insert_trip(user_id, "Test Trip", num_days).await?;

        let mut days = Vec::with_capacity(num_days as usize);
        for day_number in 1..=num_days {
            days.push(
                self.insert_day(trip.id, day_number, &format!("Day {} plan", day_number))
                    .await?,
            );
        }

        Ok((trip, days))
    }

    /// Insert a user and a trip with `num_days` days owned by that user.
    pub async fn insert_user_with_trip(
        &mut self,
        username: &str,
        num_days: i32,
    ) -> Result<(UserModel, TripModel, Vec<ItineraryDayModel>), TestError> {
        let user = self.setup.user().insert_user(username).await?;
        let (trip, days) = self.insert_trip_with_days(user.id, num_days).await?;

        Ok((user, trip, days))
    }
}
