//! Character domain model and field parameters.

use sea_orm::{ActiveValue, DbErr, EntityTrait};

use crate::{
    model::character::{CharacterDto, CharacterFieldsDto},
    server::{
        error::AppError,
        model::resource::{set_if_supplied, stored_u32, Resource},
        util::validate::{column_int, non_blank},
    },
};

/// A playable character and its build information.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub name: Option<String>,
    pub tags: Vec<String>,
    pub ability1: Option<String>,
    pub ability2: Option<String>,
    pub passive1: Option<String>,
    pub passive2: Option<String>,
    pub passive3: Option<String>,
    pub passive4: Option<String>,
    /// Whether the character has a leader skill.
    pub leader: Option<bool>,
    pub stars: Option<u32>,
    pub gear_tier: Option<u32>,
    pub farm: Option<String>,
    /// Upgrade stones needed to max the character.
    pub upgrade_stones: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterFields {
    pub name: Option<Option<String>>,
    pub tags: Option<Option<Vec<String>>>,
    pub ability1: Option<Option<String>>,
    pub ability2: Option<Option<String>>,
    pub passive1: Option<Option<String>>,
    pub passive2: Option<Option<String>>,
    pub passive3: Option<Option<String>>,
    pub passive4: Option<Option<String>>,
    pub leader: Option<Option<bool>>,
    pub stars: Option<Option<i32>>,
    pub gear_tier: Option<Option<i32>>,
    pub farm: Option<Option<String>>,
    pub upgrade_stones: Option<Option<i32>>,
}

impl CharacterFields {
    /// Validates a request DTO into character fields.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Blank name, or a count that does not fit the store
    pub fn from_dto(dto: CharacterFieldsDto) -> Result<Self, AppError> {
        Ok(Self {
            name: non_blank("name", dto.name)?,
            tags: dto.tags,
            ability1: dto.ability1,
            ability2: dto.ability2,
            passive1: dto.passive1,
            passive2: dto.passive2,
            passive3: dto.passive3,
            passive4: dto.passive4,
            leader: dto.leader,
            stars: column_int("stars", dto.stars)?,
            gear_tier: column_int("gearTier", dto.gear_tier)?,
            farm: dto.farm,
            upgrade_stones: column_int("upgradeStones", dto.upgrade_stones)?,
        })
    }
}

fn tags_column(tags: Option<Vec<String>>) -> Option<serde_json::Value> {
    tags.map(serde_json::Value::from)
}

fn stored_tags(value: Option<serde_json::Value>) -> Result<Vec<String>, DbErr> {
    match value {
        None => Ok(Vec::new()),
        Some(json) => serde_json::from_value(json)
            .map_err(|e| DbErr::Custom(format!("Failed to parse tags: {}", e))),
    }
}

impl Resource for Character {
    type Entity = entity::prelude::Character;
    type Model = entity::character::Model;
    type ActiveModel = entity::character::ActiveModel;
    type Fields = CharacterFields;
    type Dto = CharacterDto;

    const LABEL: &'static str = "Character";

    fn id_column() -> <Self::Entity as EntityTrait>::Column {
        entity::character::Column::Id
    }

    fn new_active_model(fields: CharacterFields) -> entity::character::ActiveModel {
        entity::character::ActiveModel {
            name: ActiveValue::Set(fields.name.flatten()),
            tags: ActiveValue::Set(tags_column(fields.tags.flatten())),
            ability1: ActiveValue::Set(fields.ability1.flatten()),
            ability2: ActiveValue::Set(fields.ability2.flatten()),
            passive1: ActiveValue::Set(fields.passive1.flatten()),
            passive2: ActiveValue::Set(fields.passive2.flatten()),
            passive3: ActiveValue::Set(fields.passive3.flatten()),
            passive4: ActiveValue::Set(fields.passive4.flatten()),
            leader: ActiveValue::Set(fields.leader.flatten()),
            stars: ActiveValue::Set(fields.stars.flatten()),
            gear_tier: ActiveValue::Set(fields.gear_tier.flatten()),
            farm: ActiveValue::Set(fields.farm.flatten()),
            upgrade_stones: ActiveValue::Set(fields.upgrade_stones.flatten()),
            ..Default::default()
        }
    }

    fn apply_fields(active: &mut entity::character::ActiveModel, fields: CharacterFields) {
        set_if_supplied(&mut active.name, fields.name);
        set_if_supplied(&mut active.tags, fields.tags.map(tags_column));
        set_if_supplied(&mut active.ability1, fields.ability1);
        set_if_supplied(&mut active.ability2, fields.ability2);
        set_if_supplied(&mut active.passive1, fields.passive1);
        set_if_supplied(&mut active.passive2, fields.passive2);
        set_if_supplied(&mut active.passive3, fields.passive3);
        set_if_supplied(&mut active.passive4, fields.passive4);
        set_if_supplied(&mut active.leader, fields.leader);
        set_if_supplied(&mut active.stars, fields.stars);
        set_if_supplied(&mut active.gear_tier, fields.gear_tier);
        set_if_supplied(&mut active.farm, fields.farm);
        set_if_supplied(&mut active.upgrade_stones, fields.upgrade_stones);
    }

    fn from_entity(model: entity::character::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: model.id,
            name: model.name,
            tags: stored_tags(model.tags)?,
            ability1: model.ability1,
            ability2: model.ability2,
            passive1: model.passive1,
            passive2: model.passive2,
            passive3: model.passive3,
            passive4: model.passive4,
            leader: model.leader,
            stars: stored_u32("stars", model.stars)?,
            gear_tier: stored_u32("gear_tier", model.gear_tier)?,
            farm: model.farm,
            upgrade_stones: stored_u32("upgrade_stones", model.upgrade_stones)?,
        })
    }

    fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name,
            tags: self.tags,
            ability1: self.ability1,
            ability2: self.ability2,
            passive1: self.passive1,
            passive2: self.passive2,
            passive3: self.passive3,
            passive4: self.passive4,
            leader: self.leader,
            stars: self.stars,
            gear_tier: self.gear_tier,
            farm: self.farm,
            upgrade_stones: self.upgrade_stones,
        }
    }
}
