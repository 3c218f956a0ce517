use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::ItineraryDayModel;

pub struct ItineraryDayRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItineraryDayRepository<'a, C> {
    /// Creates a new instance of [`ItineraryDayRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the itinerary entry for one day of a trip
    ///
    /// Fails when the trip does not exist or the day already has an entry.
    pub async fn create(
        &self,
        trip_id: i32,
        day_number: i32,
        content: &str,
    ) -> Result<ItineraryDayModel, DbErr> {
        let day = entity::itinerary_day::ActiveModel {
            trip_id: ActiveValue::Set(trip_id),
            day_number: ActiveValue::Set(day_number),
            content: ActiveValue::Set(content.to_string()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        day.insert(self.db).await
    }

    /// Gets all days of a trip ordered by day number
    pub async fn get_many_by_trip_id(&self, trip_id: i32) -> Result<Vec<ItineraryDayModel>, DbErr> {
        entity::prelude::ItineraryDay::find()
            .filter(entity::itinerary_day::Column::TripId.eq(trip_id))
            .order_by_asc(entity::itinerary_day::Column::DayNumber)
            .all(self.db)
            .await
    }

    /// Replaces the content of one day in place
    ///
    /// # Returns
    /// - `Ok(Some(ItineraryDayModel))` - The updated day
    /// - `Ok(None)` - The trip has no entry for `day_number`
    /// - `Err(DbErr)` - Database error
    pub async fn update_content(
        &self,
        trip_id: i32,
        day_number: i32,
        content: &str,
    ) -> Result<Option<ItineraryDayModel>, DbErr> {
        let Some(day) = entity::prelude::ItineraryDay::find()
            .filter(entity::itinerary_day::Column::TripId.eq(trip_id))
            .filter(entity::itinerary_day::Column::DayNumber.eq(day_number))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut day_am = day.into_active_model();
        day_am.content = ActiveValue::Set(content.to_string());
        day_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let day = day_am.update(self.db).await?;

        Ok(Some(day))
    }
}
