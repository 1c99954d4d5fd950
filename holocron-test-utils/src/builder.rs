//! Declarative test builder.
//!
//! The builder queues table creation and fixture inserts, all of which run during the
//! final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Fixtures are inserted in a fixed order (planets, people, vehicles, users) so the
/// auto-increment ids they receive are predictable: the first planet added has id 1,
/// the second id 2, and so on for each table.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,

    planets: Vec<String>,
    people: Vec<(String, Option<String>)>, // (name, homeworld name)
    vehicles: Vec<String>,
    users: Vec<String>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            planets: Vec::new(),
            people: Vec::new(),
            vehicles: Vec::new(),
            users: Vec::new(),
        }
    }

    /// Add every table of the catalog schema to the test database.
    ///
    /// Creates the user, person, planet and vehicle tables along with the three
    /// favorite join tables.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Planet)
    ///     .with_table(Person)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a planet with the given name.
    pub fn with_planet(mut self, name: &str) -> Self {
        self.planets.push(name.to_string());
        self
    }

    /// Insert a person, optionally linked to a planet added with `with_planet`.
    pub fn with_person(mut self, name: &str, homeworld: Option<&str>) -> Self {
        self.people
            .push((name.to_string(), homeworld.map(|h| h.to_string())));
        self
    }

    /// Insert a vehicle with the given name.
    pub fn with_vehicle(mut self, name: &str) -> Self {
        self.vehicles.push(name.to_string());
        self
    }

    /// Insert an active user whose password is [`TEST_PASSWORD`](crate::constant::TEST_PASSWORD).
    pub fn with_user(mut self, username: &str) -> Self {
        self.users.push(username.to_string());
        self
    }

    /// Build the test context, creating tables and then inserting fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with all tables and fixtures in place
    /// - `Err(TestError::DbErr)` - Table creation or fixture insert failed
    /// - `Err(TestError::Fixture)` - A person references a homeworld that was never added
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut test = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Person),
                schema.create_table_from_entity(entity::prelude::Vehicle),
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::UserPerson),
                schema.create_table_from_entity(entity::prelude::UserPlanet),
                schema.create_table_from_entity(entity::prelude::UserVehicle),
            ]);
        }

        all_tables.extend(self.tables);
        test.with_tables(all_tables).await?;

        let mut planets = Vec::new();
        for name in self.planets {
            planets.push(test.catalog().insert_planet(&name).await?);
        }

        for (name, homeworld) in self.people {
            let homeworld_id = match homeworld {
                Some(homeworld) => Some(
                    planets
                        .iter()
                        .find(|p| p.name == homeworld)
                        .map(|p| p.id)
                        .ok_or_else(|| {
                            TestError::Fixture(format!(
                                "homeworld {} of {} was not added with with_planet",
                                homeworld, name
                            ))
                        })?,
                ),
                None => None,
            };

            test.catalog().insert_person(&name, homeworld_id).await?;
        }

        for name in self.vehicles {
            test.catalog().insert_vehicle(&name).await?;
        }

        for username in self.users {
            test.user().insert_user(&username).await?;
        }

        Ok(test)
    }
}
