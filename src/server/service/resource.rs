use sea_orm::{DatabaseConnection, EntityTrait, PrimaryKeyTrait};
use std::marker::PhantomData;

use crate::server::{
    data::resource::ResourceRepository, error::AppError, model::resource::Resource,
};

/// Business logic for a record collection.
///
/// Converts repository rows into domain models and logs each mutation. Absence is
/// reported as `None` and left to the controller to turn into a 404.
pub struct ResourceService<'a, R> {
    db: &'a DatabaseConnection,
    _resource: PhantomData<R>,
}

impl<'a, R> ResourceService<'a, R>
where
    R: Resource,
    <<R::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            _resource: PhantomData,
        }
    }

    /// Gets every record of this kind
    pub async fn list(&self) -> Result<Vec<R>, AppError> {
        let repo = ResourceRepository::<R>::new(self.db);

        let models = repo.get_all().await?;

        models
            .into_iter()
            .map(R::from_entity)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    /// Gets a single record by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<R>, AppError> {
        let repo = ResourceRepository::<R>::new(self.db);

        let model = repo.get_by_id(id).await?;

        model.map(R::from_entity).transpose().map_err(Into::into)
    }

    /// Creates a new record from the supplied fields
    pub async fn create(&self, fields: R::Fields) -> Result<R, AppError> {
        let repo = ResourceRepository::<R>::new(self.db);

        let model = repo.create(fields).await?;
        let record = R::from_entity(model)?;

        tracing::debug!("Created {}", R::LABEL);

        Ok(record)
    }

    /// Updates the supplied fields of a record
    /// Returns None if the record doesn't exist
    pub async fn update(&self, id: i32, fields: R::Fields) -> Result<Option<R>, AppError> {
        let repo = ResourceRepository::<R>::new(self.db);

        let Some(model) = repo.update(id, fields).await? else {
            tracing::debug!("{} {} not found for update", R::LABEL, id);
            return Ok(None);
        };

        tracing::debug!("Updated {} {}", R::LABEL, id);

        Ok(Some(R::from_entity(model)?))
    }

    /// Deletes a record
    /// Returns the deleted record, or None if it doesn't exist
    pub async fn delete(&self, id: i32) -> Result<Option<R>, AppError> {
        let repo = ResourceRepository::<R>::new(self.db);

        let Some(model) = repo.delete(id).await? else {
            tracing::debug!("{} {} not found for delete", R::LABEL, id);
            return Ok(None);
        };

        tracing::debug!("Deleted {} {}", R::LABEL, id);

        Ok(Some(R::from_entity(model)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::{
        club::{Club, ClubFields},
        news::{News, NewsFields},
    };
    use chrono::NaiveDate;
    use sea_orm::{ActiveModelTrait, ActiveValue};
    use test_utils::{builder::TestBuilder, factory};

    /// Tests that listing converts every stored row into a domain model.
    ///
    /// Expected: Ok with two news posts in identity order
    #[tokio::test]
    async fn lists_news_as_domain_models() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::News)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = factory::news::create_news(db).await?;
        let second = factory::news::NewsFactory::new(db)
            .description("Server maintenance")
            .build()
            .await?;

        let service = ResourceService::<News>::new(db);
        let news = service.list().await?;

        assert_eq!(news.len(), 2);
        assert_eq!(news[0].id, first.id);
        assert_eq!(news[1].id, second.id);
        assert_eq!(news[1].description.as_deref(), Some("Server maintenance"));

        Ok(())
    }

    /// Tests that create returns the stored record with its assigned identity.
    ///
    /// Expected: Ok with News carrying the supplied fields
    #[tokio::test]
    async fn creates_news() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::News)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = ResourceService::<News>::new(db);
        let news = service
            .create(NewsFields {
                date: Some(NaiveDate::from_ymd_opt(2024, 1, 1)),
                description: Some(Some("patch notes".to_string())),
            })
            .await?;

        assert!(news.id > 0);
        assert_eq!(news.date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(news.description.as_deref(), Some("patch notes"));

        Ok(())
    }

    /// Tests that updating an unknown record reports absence.
    ///
    /// Expected: Ok(None)
    #[tokio::test]
    async fn update_returns_none_for_unknown_club() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Club)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = ResourceService::<Club>::new(db);
        let result = service
            .update(
                999,
                ClubFields {
                    name: Some(Some("Ghost Club".to_string())),
                    ..Default::default()
                },
            )
            .await?;

        assert!(result.is_none());

        Ok(())
    }

    /// Tests that a corrupt stored value surfaces as an error instead of being dropped.
    ///
    /// Expected: Err(AppError::DbErr)
    #[tokio::test]
    async fn list_fails_on_corrupt_club_tier() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Club)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        entity::club::ActiveModel {
            name: ActiveValue::Set(Some("Broken".to_string())),
            club_expedition_tier: ActiveValue::Set(Some("Q".to_string())),
            ..Default::default()
        }
        .insert(db)
        .await?;

        let service = ResourceService::<Club>::new(db);
        let result = service.list().await;

        assert!(matches!(result, Err(AppError::DbErr(_))));

        Ok(())
    }
}
