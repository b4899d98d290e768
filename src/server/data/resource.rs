use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, PrimaryKeyTrait,
    QueryOrder,
};
use std::marker::PhantomData;

use crate::server::model::resource::Resource;

/// Repository implementing list/get/create/update/delete for any [`Resource`].
///
/// Each method is a single independent request to the store (update and delete
/// look the record up first so absence can be reported).
pub struct ResourceRepository<'a, R> {
    db: &'a DatabaseConnection,
    _resource: PhantomData<R>,
}

impl<'a, R> ResourceRepository<'a, R>
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

    /// Gets every stored record, ordered by identity
    pub async fn get_all(&self) -> Result<Vec<R::Model>, DbErr> {
        R::Entity::find()
            .order_by_asc(R::id_column())
            .all(self.db)
            .await
    }

    /// Gets a record by identity
    pub async fn get_by_id(&self, id: i32) -> Result<Option<R::Model>, DbErr> {
        R::Entity::find_by_id(id).one(self.db).await
    }

    /// Inserts a new record, the store assigns its identity
    pub async fn create(&self, fields: R::Fields) -> Result<R::Model, DbErr> {
        R::new_active_model(fields).insert(self.db).await
    }

    /// Replaces the supplied fields on a record and returns the updated row
    ///
    /// Returns `None` if no record has the given identity, including when it is
    /// removed between the lookup and the write.
    pub async fn update(&self, id: i32, fields: R::Fields) -> Result<Option<R::Model>, DbErr> {
        let Some(existing) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: R::ActiveModel = existing.clone().into_active_model();
        R::apply_fields(&mut active_model, fields);

        if !active_model.is_changed() {
            return Ok(Some(existing));
        }

        match active_model.update(self.db).await {
            Ok(updated) => Ok(Some(updated)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Deletes a record and returns its value prior to deletion
    ///
    /// Returns `None` if no record has the given identity.
    pub async fn delete(&self, id: i32) -> Result<Option<R::Model>, DbErr> {
        let Some(existing) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let result = R::Entity::delete_by_id(id).exec(self.db).await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(existing))
    }
}
