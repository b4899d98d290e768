//! Generic record-kind abstraction shared by every collection endpoint.
//!
//! Each record kind (news, spells, clubs, characters, events) implements [`Resource`],
//! binding its SeaORM entity to a domain model, a field-set parameter type and an API
//! DTO. The repository and service layers are written once against this trait, so
//! list/get/create/update/delete behave identically for every kind.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, DbErr, EntityTrait, IntoActiveModel,
};
use serde::Serialize;

/// A record kind exposed as a CRUD collection.
///
/// Field sets (`Fields`) are partial: every member is an `Option<Option<T>>` where the
/// outer `None` means the client did not send the key and `Some(None)` means it sent
/// `null`. On create both are stored as NULL. On update, absent fields are left
/// untouched and `null` clears the column.
pub trait Resource: Sized + Send + Sync + 'static {
    /// SeaORM entity backing this record kind.
    type Entity: EntityTrait<Model = Self::Model>;
    /// Row model returned by the entity.
    type Model: IntoActiveModel<Self::ActiveModel> + Clone + Send + Sync;
    /// Active model used for inserts and updates.
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + Send
        + Sync
        + 'static;
    /// Validated, partial set of fields supplied by a client.
    type Fields: Send;
    /// Serialized representation returned to API clients.
    type Dto: Serialize;

    /// Human-readable name used in log lines and error messages.
    const LABEL: &'static str;

    /// Identity column, used for ordering list results.
    fn id_column() -> <Self::Entity as EntityTrait>::Column;

    /// Builds an active model for insertion with every column explicitly set.
    fn new_active_model(fields: Self::Fields) -> Self::ActiveModel;

    /// Overwrites only the columns present in `fields`.
    fn apply_fields(active: &mut Self::ActiveModel, fields: Self::Fields);

    /// Converts a stored row into the domain model.
    ///
    /// # Returns
    /// - `Err(DbErr::Custom)` - A stored value could not be decoded
    fn from_entity(model: Self::Model) -> Result<Self, DbErr>;

    /// Converts the domain model into its API DTO.
    fn into_dto(self) -> Self::Dto;
}

/// Sets `slot` only when the field was supplied, leaving it untouched otherwise.
///
/// An explicit `null` (`Some(None)`) clears the column.
pub fn set_if_supplied<V>(slot: &mut ActiveValue<Option<V>>, value: Option<Option<V>>)
where
    Option<V>: Into<sea_orm::Value>,
{
    if let Some(value) = value {
        *slot = ActiveValue::Set(value);
    }
}

/// Converts a stored integer column back into an unsigned domain value.
pub fn stored_u32(column: &str, value: Option<i32>) -> Result<Option<u32>, DbErr> {
    value
        .map(|v| {
            u32::try_from(v)
                .map_err(|_| DbErr::Custom(format!("Stored {} is negative: {}", column, v)))
        })
        .transpose()
}
