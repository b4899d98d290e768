use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test context containing the database connection for an isolated test.
///
/// Every context owns its own in-memory SQLite database, so tests never observe each
/// other's records.
pub struct TestContext {
    /// Optional database connection to in-memory SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Creates a new empty test context.
    ///
    /// # Returns
    /// - New `TestContext` instance with no database connection
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// Returns a reference to the existing database connection if one exists, otherwise
    /// creates a new in-memory SQLite database and stores the connection. The connection
    /// persists for the lifetime of this test context.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref) // Re-borrow as immutable
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Typically called internally by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use sea_orm::EntityTrait;

    /// Tests that a freshly built context has empty record tables.
    ///
    /// Expected: Ok with zero news rows
    #[tokio::test]
    async fn builds_empty_resource_tables() -> Result<(), TestError> {
        let test = TestBuilder::new().with_resource_tables().build().await?;
        let db = test.db.as_ref().unwrap();

        let news = entity::prelude::News::find().all(db).await?;
        assert!(news.is_empty());

        Ok(())
    }

    /// Tests that the connection is created once and reused.
    ///
    /// Expected: Ok with the same table visible through both borrows
    #[tokio::test]
    async fn reuses_database_connection() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_table(entity::prelude::Club)
            .build()
            .await?;

        let db = test.database().await?;
        let clubs = entity::prelude::Club::find().all(db).await?;
        assert!(clubs.is_empty());

        Ok(())
    }
}
