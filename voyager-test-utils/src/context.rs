//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context includes an
//! in-memory SQLite database, a mock server standing in for the AI service, and a session
//! backed by an in-memory store.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};
use tower_sessions::{MemoryStore, Session};

use crate::{constant::TEST_AI_API_KEY, error::TestError};

/// Test context structure returned by `TestBuilder`
///
/// Provides access to:
/// - In-memory SQLite database with foreign keys enforced
/// - Mock HTTP server for the AI service
/// - Session for authentication flows
/// - Collection of mock endpoints for assertion
///
/// ```ignore
/// let mut test = TestBuilder::new().with_trip_tables().build().await?;
///
/// let user = test.user().insert_user("traveller").await?;
/// let (trip, days) = test.trip().insert_trip_with_days(user.id, 3).await?;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for test authentication flows
    pub session: Session,

    /// Mock HTTP server for the AI service
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Convert the database connection and mock AI endpoint into any type that can be
    /// constructed from them.
    ///
    /// The tuple holds the database connection, the AI service base URL and the API key.
    /// This allows conversion to `AppState` without a circular dependency between the
    /// test-utils crate and the main voyager crate.
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, String, String)>,
    {
        T::from((
            self.db.clone(),
            self.ai_base_url(),
            TEST_AI_API_KEY.to_string(),
        ))
    }

    /// Base URL of the mock AI server.
    pub fn ai_base_url(&self) -> String {
        self.server.url()
    }

    /// Mutable access to the mock server for tests that register endpoints after `build()`.
    pub fn server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            server: mock_server,
            db,
            session,
            mocks: Vec::new(),
        })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Create indexes that entity derived schemas do not carry, such as composite unique keys.
    pub(crate) async fn with_indexes(
        &self,
        stmts: Vec<IndexCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
