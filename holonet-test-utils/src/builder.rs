//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Fixtures are inserted in the order planets, people, starships, users, so IDs are
/// assigned sequentially from 1 within each table in the order they were queued.
pub struct TestBuilder {
    // Schema to create
    tables: Vec<TableCreateStatement>,
    run_migrations: bool,

    // Database fixtures to insert
    planets: Vec<String>,
    people: Vec<(String, Option<i32>)>, // (name, homeworld_id)
    starships: Vec<String>,
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
            run_migrations: false,
            planets: Vec::new(),
            people: Vec::new(),
            starships: Vec::new(),
            users: Vec::new(),
        }
    }

    /// Create the full schema by running all migrations.
    ///
    /// Unlike [`TestBuilder::with_table`] this also creates indexes, including the
    /// unique index on favorites.
    pub fn with_migrations(mut self) -> Self {
        self.run_migrations = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Useful to test behaviour when other required tables are missing.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holonet_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), holonet_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::Planet)
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

    /// Insert a mock planet with the given name.
    pub fn with_planet(mut self, name: &str) -> Self {
        self.planets.push(name.to_string());
        self
    }

    /// Insert a mock person with the given name and optional homeworld planet ID.
    pub fn with_person(mut self, name: &str, homeworld_id: Option<i32>) -> Self {
        self.people.push((name.to_string(), homeworld_id));
        self
    }

    /// Insert a mock starship with the given name.
    pub fn with_starship(mut self, name: &str) -> Self {
        self.starships.push(name.to_string());
        self
    }

    /// Insert a mock user with the given username, email is derived from it.
    pub fn with_user(mut self, username: &str) -> Self {
        self.users.push(username.to_string());
        self
    }

    /// Build the test context, creating the schema then inserting queued fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context ready for use
    /// - `Err(TestError::DbErr)` - Schema creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::new().await?;

        if self.run_migrations {
            test.with_migrations().await?;
        }
        test.with_tables(self.tables).await?;

        for name in &self.planets {
            test.catalogue().insert_planet(name).await?;
        }
        for (name, homeworld_id) in &self.people {
            test.catalogue().insert_person(name, *homeworld_id).await?;
        }
        for name in &self.starships {
            test.catalogue().insert_starship(name).await?;
        }
        for username in &self.users {
            test.user().insert_user(username).await?;
        }

        Ok(test)
    }
}
