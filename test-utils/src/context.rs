use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment holding an in-memory SQLite connection.
///
/// The connection is created lazily on first access and lives for the
/// duration of the test, so every query in one test sees the same
/// in-memory database.
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Gets or creates the in-memory SQLite connection.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Creates tables from the given CREATE TABLE statements, in order.
    /// Called by `TestBuilder::build` rather than directly.
    pub async fn with_tables(
        &mut self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in &stmts {
            let backend = db.get_database_backend();
            db.execute(backend.build(stmt)).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
