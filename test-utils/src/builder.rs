use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with customizable database schemas.
///
/// Add entity tables in dependency order (tables with foreign keys after
/// the tables they reference), then call `build()`.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(Category)
///     .with_table(Destination)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds one entity table to the schema.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every migrated portal table in dependency order. The optional
    /// analytics tables are not included; see `with_analytics_tables()`.
    pub fn with_portal_tables(self) -> Self {
        self.with_table(Category)
            .with_table(ServiceType)
            .with_table(User)
            .with_table(Destination)
            .with_table(Service)
            .with_table(DestinationService)
            .with_table(Event)
            .with_table(EventFollow)
            .with_table(Favorite)
            .with_table(GalleryImage)
            .with_table(Banner)
    }

    /// Adds the optional analytics tables (`visit`, `service_usage`) on top
    /// of whatever is already configured. Tests that exercise the
    /// degraded/absent path simply leave these out.
    pub fn with_analytics_tables(self) -> Self {
        self.with_table(Visit).with_table(ServiceUsage)
    }

    /// Builds the context and creates the configured tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
