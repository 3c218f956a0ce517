use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::db::TripModel;

pub struct TripRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TripRepository<'a, C> {
    /// Creates a new instance of [`TripRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new trip owned by `user_id`
    ///
    /// # Arguments
    /// - `user_id` - Owning user, must exist
    /// - `title` - Destination of the trip
    /// - `num_days` - Requested trip length
    /// - `preferences` - Optional free text preferences
    ///
    /// # Returns
    /// - `Ok(TripModel)` - The inserted trip
    /// - `Err(DbErr)` - Foreign key violation for an unknown user or other database error
    pub async fn create(
        &self,
        user_id: i32,
        title: &str,
        num_days: i32,
        preferences: Option<&str>,
    ) -> Result<TripModel, DbErr> {
        let trip = entity::trip::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(title.to_string()),
            num_days: ActiveValue::Set(num_days),
            preferences: ActiveValue::Set(preferences.map(str::to_string)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        trip.insert(self.db).await
    }

    pub async fn get_by_id(&self, trip_id: i32) -> Result<Option<TripModel>, DbErr> {
        entity::prelude::Trip::find_by_id(trip_id).one(self.db).await
    }

    /// Gets all trips owned by a user, newest first
    pub async fn get_many_by_user_id(&self, user_id: i32) -> Result<Vec<TripModel>, DbErr> {
        entity::prelude::Trip::find()
            .filter(entity::trip::Column::UserId.eq(user_id))
            .order_by_desc(entity::trip::Column::CreatedAt)
            .order_by_desc(entity::trip::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a trip along with its itinerary days
    ///
    /// Returns OK regardless of trip existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, trip_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Trip::delete_by_id(trip_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use voyager_test_utils::prelude::*;

        use crate::server::data::trip::TripRepository;

        /// Expect success when creating a trip for an existing user
        #[tokio::test]
        async fn creates_trip() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_trip_tables().build().await?;
            let user = test.user().insert_user("traveller").await?;

            let trip_repo = TripRepository::new(&test.db);
            let result = trip_repo
                .create(user.id, "Kyoto", 4, Some("temples, ramen"))
                .await;

            assert!(result.is_ok());
            let trip = result.unwrap();
            assert_eq!(trip.user_id, user.id);
            assert_eq!(trip.title, "Kyoto");
            assert_eq!(trip.num_days, 4);
            assert_eq!(trip.preferences.as_deref(), Some("temples, ramen"));

            Ok(())
        }

        /// Expect Error when the owning user does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_trip_tables().build().await?;

            let trip_repo = TripRepository::new(&test.db);
            let result = trip_repo.create(1, "Kyoto", 4, None).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_by_id {
        use voyager_test_utils::prelude::*;

        use crate::server::data::trip::TripRepository;

        /// Expect Some for an existing trip and None for an unknown id
        #[tokio::test]
        async fn finds_existing_trip() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_trip_tables().build().await?;
            let (_, trip, _) = test.trip().insert_user_with_trip("traveller", 2).await?;

            let trip_repo = TripRepository::new(&test.db);

            let found = trip_repo.get_by_id(trip.id).await.unwrap();
            assert_eq!(found, Some(trip.clone()));
            let missing = trip_repo.get_by_id(trip.id + 1).await.unwrap();
            assert!(missing.is_none());

            Ok(())
        }
    }

    mod get_many_by_user_id {
        use voyager_test_utils::prelude::*;

        use crate::server::data::trip::TripRepository;

        /// Expect only the user's trips, newest first
        #[tokio::test]
        async fn returns_user_trips_newest_first() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_trip_tables().build().await?;
            let user = test.user().insert_user("traveller").await?;
            let other = test.user().insert_user("other").await?;
            let first = test.trip().insert_trip(user.id, "Oslo", 2).await?;
            let second = test.trip().insert_trip(user.id, "Rome", 3).await?;
            test.trip().insert_trip(other.id, "Lima", 4).await?;

            let trip_repo = TripRepository::new(&test.db);
            let trips = trip_repo.get_many_by_user_id(user.id).await.unwrap();

            let ids: Vec<i32> = trips.iter().map(|t| t.id).collect();
            assert_eq!(ids, vec![second.id, first.id]);

            Ok(())
        }

        /// Expect an empty list for a user without trips
        #[tokio::test]
        async fn returns_empty_for_user_without_trips() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_trip_tables().build().await?;
            let user = test.user().insert_user("traveller").await?;

            let trip_repo = TripRepository::new(&test.db);
            let trips = trip_repo.get_many_by_user_id(user.id).await.unwrap();

            assert!(trips.is_empty());

            Ok(())
        }
    }

    mod delete {
        use sea_orm::{EntityTrait, PaginatorTrait};
        use voyager_test_utils::prelude::*;

        use crate::server::data::trip::TripRepository;

        /// Expect deleting a trip to remove its days but not other trips' days
        #[tokio::test]
        async fn cascades_to_days() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_trip_tables().build().await?;
            let (user, trip, _) = test.trip().insert_user_with_trip("traveller", 3).await?;
            test.trip().insert_trip_with_days(user.id, 2).await?;

            let trip_repo = TripRepository::new(&test.db);
            let result = trip_repo.delete(trip.id).await.unwrap();

            assert_eq!(result.rows_affected, 1);
            let days = entity::prelude::ItineraryDay::find().all(&test.db).await?;
            assert_eq!(days.len(), 2);
            assert!(days.iter().all(|d| d.trip_id != trip.id));
            let trips = entity::prelude::Trip::find().count(&test.db).await?;
            assert_eq!(trips, 1);

            Ok(())
        }
    }
}
