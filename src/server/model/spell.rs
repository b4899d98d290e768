//! Spell domain model and field parameters.

use sea_orm::{ActiveValue, DbErr, EntityTrait};

use crate::{
    model::spell::{SpellDto, SpellFieldsDto},
    server::{
        error::AppError,
        model::resource::{set_if_supplied, Resource},
        util::validate::non_blank,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Spell {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Where in the game the spell can be farmed.
    pub farm: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpellFields {
    pub name: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub farm: Option<Option<String>>,
}

impl SpellFields {
    /// Validates a request DTO into spell fields.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - A supplied name was blank
    pub fn from_dto(dto: SpellFieldsDto) -> Result<Self, AppError> {
        Ok(Self {
            name: non_blank("name", dto.name)?,
            description: dto.description,
            farm: dto.farm,
        })
    }
}

impl Resource for Spell {
    type Entity = entity::prelude::Spell;
    type Model = entity::spell::Model;
    type ActiveModel = entity::spell::ActiveModel;
    type Fields = SpellFields;
    type Dto = SpellDto;

    const LABEL: &'static str = "Spell";

    fn id_column() -> <Self::Entity as EntityTrait>::Column {
        entity::spell::Column::Id
    }

    fn new_active_model(fields: SpellFields) -> entity::spell::ActiveModel {
        entity::spell::ActiveModel {
            name: ActiveValue::Set(fields.name.flatten()),
            description: ActiveValue::Set(fields.description.flatten()),
            farm: ActiveValue::Set(fields.farm.flatten()),
            ..Default::default()
        }
    }

    fn apply_fields(active: &mut entity::spell::ActiveModel, fields: SpellFields) {
        set_if_supplied(&mut active.name, fields.name);
        set_if_supplied(&mut active.description, fields.description);
        set_if_supplied(&mut active.farm, fields.farm);
    }

    fn from_entity(model: entity::spell::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: model.id,
            name: model.name,
            description: model.description,
            farm: model.farm,
        })
    }

    fn into_dto(self) -> SpellDto {
        SpellDto {
            id: self.id,
            name: self.name,
            description: self.description,
            farm: self.farm,
        }
    }
}
