//! Declarative test builder.
//!
//! The builder queues table creation and is finalized with `build()`, which connects a fresh
//! in-memory database and runs every queued statement.

use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    indexes: Vec<IndexCreateStatement>,
    include_workflow_tables: bool,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
            include_workflow_tables: false,
        }
    }

    /// Add every table used by the recruitment workflow.
    ///
    /// Creates User, RecruitmentSeries, Module, ModuleCoordinator, TaApplication, AppliedModules
    /// and AppliedModulesEntry, parents before children, along with the composite unique keys
    /// declared on the entities.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_workflow_tables(mut self) -> Self {
        self.include_workflow_tables = true;
        self
    }

    /// Add a single entity table, with its declared indexes, to the test database.
    ///
    /// Chain multiple calls to add multiple tables. Tables are created in the order given,
    /// after the workflow tables if those were requested.
    ///
    /// ```no_run
    /// use tarecruit_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), tarecruit_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(RecruitmentSeries)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self.indexes.extend(schema.create_index_from_entity(entity));
        self
    }

    /// Build the test context, creating all queued tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an initialized schema
    /// - `Err(TestError::DbErr)` - Connecting or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut all_tables = Vec::new();
        let mut all_indexes = Vec::new();

        if self.include_workflow_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::RecruitmentSeries),
                schema.create_table_from_entity(entity::prelude::Module),
                schema.create_table_from_entity(entity::prelude::ModuleCoordinator),
                schema.create_table_from_entity(entity::prelude::TaApplication),
                schema.create_table_from_entity(entity::prelude::AppliedModules),
                schema.create_table_from_entity(entity::prelude::AppliedModulesEntry),
            ]);
            all_indexes.extend(schema.create_index_from_entity(entity::prelude::ModuleCoordinator));
            all_indexes.extend(schema.create_index_from_entity(entity::prelude::TaApplication));
            all_indexes.extend(schema.create_index_from_entity(entity::prelude::AppliedModules));
        }

        all_tables.extend(self.tables);
        all_indexes.extend(self.indexes);
        context.with_tables(all_tables).await?;
        context.with_indexes(all_indexes).await?;

        Ok(context)
    }
}
