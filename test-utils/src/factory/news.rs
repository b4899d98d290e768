//! News factory for creating test news posts.
//!
//! This module provides factory methods for creating news entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test news posts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::news::NewsFactory;
///
/// let news = NewsFactory::new(&db)
///     .date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///     .description("patch notes")
///     .build()
///     .await?;
/// ```
pub struct NewsFactory<'a> {
    db: &'a DatabaseConnection,
    date: Option<NaiveDate>,
    description: Option<String>,
}

impl<'a> NewsFactory<'a> {
    /// Creates a new NewsFactory with default values.
    ///
    /// Defaults:
    /// - date: `2024-01-01`
    /// - description: `"News {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `NewsFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            date: NaiveDate::from_ymd_opt(2024, 1, 1),
            description: Some(format!("News {}", id)),
        }
    }

    /// Sets the publication date.
    ///
    /// # Arguments
    /// - `date` - Calendar date of the post
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the description text.
    ///
    /// # Arguments
    /// - `description` - Body of the post
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the news entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::news::Model)` - Created news entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::news::Model, DbErr> {
        entity::news::ActiveModel {
            date: ActiveValue::Set(self.date),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a news post with default values.
///
/// Shorthand for `NewsFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::news::Model)` - Created news entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_news(db: &DatabaseConnection) -> Result<entity::news::Model, DbErr> {
    NewsFactory::new(db).build().await
}
