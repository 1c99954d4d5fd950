//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns an
//! in-memory SQLite database and the JWT secret used to build application state.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_JWT_SECRET, error::TestError};

/// Test context structure returned by `TestBuilder`
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_catalog_tables().build().await?;
///
/// let planet = test.catalog().insert_planet("Tatooine").await?;
/// let user = test.user().insert_user("luke").await?;
///
/// let state: AppState = test.to_app_state();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Secret used to sign and verify access tokens
    pub jwt_secret: String,
}

impl TestContext {
    /// Convert database and JWT secret into any type that can be constructed from them
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main holocron crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, String)>,
    {
        T::from((self.db.clone(), self.jwt_secret.clone()))
    }
}

impl TestContext {
    /// Create a new test context with an empty in-memory SQLite database.
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            jwt_secret: TEST_JWT_SECRET.to_string(),
        })
    }

    /// Create database tables from schema statements.
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

/// Create a [`TestContext`] with tables for the listed entities.
///
/// With no arguments the database is left empty, which is useful to provoke database
/// errors in tests.
///
/// ```ignore
/// let test = test_setup_with_tables!(entity::prelude::Planet, entity::prelude::Person)?;
/// ```
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestContext::new().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
