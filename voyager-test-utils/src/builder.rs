//! Declarative test builder for test setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use mockito::Mock;
use sea_orm::{
    sea_query::{Index, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables,
/// user fixtures, and mock AI endpoints. Methods can be chained together and finalized
/// with `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_trip_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    itinerary_endpoints: Vec<(Vec<String>, usize)>, // (day summaries, expected_requests)
    day_endpoints: Vec<(i32, String, usize)>,       // (day, summary, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_trip_tables: false,
            users: Vec::new(),
            mock_builders: Vec::new(),
            itinerary_endpoints: Vec::new(),
            day_endpoints: Vec::new(),
        }
    }

    /// Add the users, trips and itinerary_days tables to the test database.
    ///
    /// Also creates the unique `(trip_id, day_number)` index on itinerary days.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_trip_tables(mut self) -> Self {
        self.include_trip_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use voyager_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), voyager_test_utils::TestError> {
    /// let test = TestBuilder::new().with_table(User).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the standard test password.
    ///
    /// Requires the users table, usually via `with_trip_tables`.
    ///
    /// # Arguments
    /// - `username` - Username for the fixture user
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_user(mut self, username: impl Into<String>) -> Self {
        self.users.push(username.into());
        self
    }

    /// Add a mock full itinerary endpoint to the test server.
    ///
    /// Creates a mock `POST /v1/responses` endpoint replying with a `{"days": [...]}` document
    /// built from `summaries`, numbered from 1. The mock will verify it was called exactly
    /// `expected_requests` times.
    ///
    /// # Arguments
    /// - `summaries` - One summary per day, in day order
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_itinerary_endpoint<S: Into<String>>(
        mut self,
        summaries: Vec<S>,
        expected_requests: usize,
    ) -> Self {
        self.itinerary_endpoints.push((
            summaries.into_iter().map(Into::into).collect(),
            expected_requests,
        ));
        self
    }

    /// Add a mock single day endpoint to the test server.
    ///
    /// Creates a mock `POST /v1/responses` endpoint replying with a `{"day", "summary"}` document.
    ///
    /// # Arguments
    /// - `day` - Day number reported by the mock
    /// - `summary` - Summary text reported by the mock
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_day_endpoint(
        mut self,
        day: i32,
        summary: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.day_endpoints
            .push((day, summary.into(), expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Allows complete customization of mock endpoint behavior by providing direct access
    /// to the mockito ServerGuard. Use this for endpoints not covered by helper methods.
    ///
    /// # Arguments
    /// - `setup` - Closure that receives the mock server and returns a configured Mock
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (trip tables if specified, then custom tables)
    /// 2. Inserts database fixtures (users)
    /// 3. Creates mock HTTP endpoints (custom endpoints, then AI shortcuts)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    /// - `Err(TestError::PasswordHash)` - Fixture password hashing failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();
        let mut indexes = Vec::new();

        if self.include_trip_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Trip),
                schema.create_table_from_entity(entity::prelude::ItineraryDay),
            ]);

            indexes.push(
                Index::create()
                    .name("idx_itinerary_days_trip_id_day_number")
                    .table(entity::prelude::ItineraryDay)
                    .col(entity::itinerary_day::Column::TripId)
                    .col(entity::itinerary_day::Column::DayNumber)
                    .unique()
                    .to_owned(),
            );
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;
        setup.with_indexes(indexes).await?;

        // 2. Insert database fixtures
        for username in self.users {
            setup.user().insert_user(&username).await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints first so tests can stack an error mock ahead of a success mock
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (summaries, expected) in self.itinerary_endpoints {
            mocks.push(setup.ai().create_itinerary_endpoint(&summaries, expected));
        }

        for (day, summary, expected) in self.day_endpoints {
            mocks.push(setup.ai().create_day_endpoint(day, &summary, expected));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
