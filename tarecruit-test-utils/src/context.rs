//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder` for test execution. The
//! context includes an in-memory SQLite database and a session backed by a memory store.

use std::sync::Arc;

use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_workflow_tables().build().await?;
///
/// let series = test.workflow().insert_series().await?;
/// let module = test.workflow().insert_module(series.id, ModuleSpec::default()).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session used by handlers that read the logged in user
    pub session: Session,
}

impl TestContext {
    /// Create a new test context with an empty in-memory database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, session })
    }

    /// Execute CREATE TABLE statements in order.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Execute CREATE INDEX statements, after the tables they index exist.
    pub(crate) async fn with_indexes(
        &self,
        stmts: Vec<IndexCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
