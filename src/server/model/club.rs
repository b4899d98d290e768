//! Club domain model and field parameters.
//!
//! Clubs are player guilds advertised through the companion app. Besides contact
//! details, each club lists its rank in three competitive modes (Club Expedition,
//! Forbidden Depths raids and Siege of Olympus) as a [`ClubTier`].

use sea_orm::{ActiveValue, DbErr, EntityTrait};

use crate::{
    model::club::{ClubDto, ClubFieldsDto, ClubTier},
    server::{
        error::AppError,
        model::resource::{set_if_supplied, stored_u32, Resource},
        util::validate::{column_int, non_blank},
    },
};

/// A stored club listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Club {
    /// Store-assigned identity.
    pub id: i32,
    pub name: Option<String>,
    /// Current member count.
    pub members: Option<u32>,
    pub club_expedition_tier: Option<ClubTier>,
    pub forbidden_depths_raid_tier: Option<ClubTier>,
    pub siege_of_olympus_tier: Option<ClubTier>,
    /// Name of the alliance the club belongs to.
    pub alliance: Option<String>,
    /// Free-form contact details (in-game name, Discord handle, ...).
    pub contact_info: Option<String>,
}

/// Partial set of club fields supplied on create or update.
///
/// `members` is already narrowed to the store's column type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClubFields {
    pub name: Option<Option<String>>,
    pub members: Option<Option<i32>>,
    pub club_expedition_tier: Option<Option<ClubTier>>,
    pub forbidden_depths_raid_tier: Option<Option<ClubTier>>,
    pub siege_of_olympus_tier: Option<Option<ClubTier>>,
    pub alliance: Option<Option<String>>,
    pub contact_info: Option<Option<String>>,
}

impl ClubFields {
    /// Validates a request DTO into club fields.
    ///
    /// # Arguments
    /// - `dto` - Club fields as received from the client
    ///
    /// # Returns
    /// - `Ok(ClubFields)` - Validated fields
    /// - `Err(AppError::BadRequest)` - Blank name or a member count past the column range
    pub fn from_dto(dto: ClubFieldsDto) -> Result<Self, AppError> {
        Ok(Self {
            name: non_blank("name", dto.name)?,
            members: column_int("members", dto.members)?,
            club_expedition_tier: dto.club_expedition_tier,
            forbidden_depths_raid_tier: dto.forbidden_depths_raid_tier,
            siege_of_olympus_tier: dto.siege_of_olympus_tier,
            alliance: dto.alliance,
            contact_info: dto.contact_info,
        })
    }
}

/// Decodes a stored tier letter.
fn stored_tier(column: &str, value: Option<String>) -> Result<Option<ClubTier>, DbErr> {
    value
        .map(|v| {
            v.parse::<ClubTier>()
                .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", column, e)))
        })
        .transpose()
}

fn tier_column(tier: Option<ClubTier>) -> Option<String> {
    tier.map(|t| t.as_str().to_string())
}

impl Resource for Club {
    type Entity = entity::prelude::Club;
    type Model = entity::club::Model;
    type ActiveModel = entity::club::ActiveModel;
    type Fields = ClubFields;
    type Dto = ClubDto;

    const LABEL: &'static str = "Club";

    fn id_column() -> <Self::Entity as EntityTrait>::Column {
        entity::club::Column::Id
    }

    fn new_active_model(fields: ClubFields) -> entity::club::ActiveModel {
        entity::club::ActiveModel {
            name: ActiveValue::Set(fields.name.flatten()),
            members: ActiveValue::Set(fields.members.flatten()),
            club_expedition_tier: ActiveValue::Set(tier_column(
                fields.club_expedition_tier.flatten(),
            )),
            forbidden_depths_raid_tier: ActiveValue::Set(tier_column(
                fields.forbidden_depths_raid_tier.flatten(),
            )),
            siege_of_olympus_tier: ActiveValue::Set(tier_column(
                fields.siege_of_olympus_tier.flatten(),
            )),
            alliance: ActiveValue::Set(fields.alliance.flatten()),
            contact_info: ActiveValue::Set(fields.contact_info.flatten()),
            ..Default::default()
        }
    }

    fn apply_fields(active: &mut entity::club::ActiveModel, fields: ClubFields) {
        set_if_supplied(&mut active.name, fields.name);
        set_if_supplied(&mut active.members, fields.members);
        set_if_supplied(
            &mut active.club_expedition_tier,
            fields.club_expedition_tier.map(tier_column),
        );
        set_if_supplied(
            &mut active.forbidden_depths_raid_tier,
            fields.forbidden_depths_raid_tier.map(tier_column),
        );
        set_if_supplied(
            &mut active.siege_of_olympus_tier,
            fields.siege_of_olympus_tier.map(tier_column),
        );
        set_if_supplied(&mut active.alliance, fields.alliance);
        set_if_supplied(&mut active.contact_info, fields.contact_info);
    }

    fn from_entity(model: entity::club::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: model.id,
            name: model.name,
            members: stored_u32("members", model.members)?,
            club_expedition_tier: stored_tier("club_expedition_tier", model.club_expedition_tier)?,
            forbidden_depths_raid_tier: stored_tier(
                "forbidden_depths_raid_tier",
                model.forbidden_depths_raid_tier,
            )?,
            siege_of_olympus_tier: stored_tier(
                "siege_of_olympus_tier",
                model.siege_of_olympus_tier,
            )?,
            alliance: model.alliance,
            contact_info: model.contact_info,
        })
    }

    fn into_dto(self) -> ClubDto {
        ClubDto {
            id: self.id,
            name: self.name,
            members: self.members,
            club_expedition_tier: self.club_expedition_tier,
            forbidden_depths_raid_tier: self.forbidden_depths_raid_tier,
            siege_of_olympus_tier: self.siege_of_olympus_tier,
            alliance: self.alliance,
            contact_info: self.contact_info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_dto_rejects_blank_name() {
        let dto = ClubFieldsDto {
            name: Some(Some("".to_string())),
            ..Default::default()
        };
        assert!(matches!(
            ClubFields::from_dto(dto),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn from_entity_rejects_corrupt_tier() {
        let model = entity::club::Model {
            id: 1,
            name: Some("Olympians".to_string()),
            members: Some(30),
            club_expedition_tier: Some("Q".to_string()),
            forbidden_depths_raid_tier: None,
            siege_of_olympus_tier: None,
            alliance: None,
            contact_info: None,
        };
        assert!(Club::from_entity(model).is_err());
    }

    #[test]
    fn tiers_are_stored_as_letters() {
        let active = Club::new_active_model(ClubFields {
            siege_of_olympus_tier: Some(Some(ClubTier::A)),
            ..Default::default()
        });
        assert!(matches!(
            active.siege_of_olympus_tier,
            ActiveValue::Set(Some(ref tier)) if tier == "A"
        ));
        assert!(matches!(active.club_expedition_tier, ActiveValue::Set(None)));
    }

    #[test]
    fn null_tier_clears_column_on_update() {
        let mut active = entity::club::ActiveModel {
            club_expedition_tier: ActiveValue::Unchanged(Some("B".to_string())),
            forbidden_depths_raid_tier: ActiveValue::Unchanged(Some("C".to_string())),
            ..Default::default()
        };
        Club::apply_fields(
            &mut active,
            ClubFields {
                club_expedition_tier: Some(None),
                ..Default::default()
            },
        );
        assert!(matches!(active.club_expedition_tier, ActiveValue::Set(None)));
        assert!(matches!(
            active.forbidden_depths_raid_tier,
            ActiveValue::Unchanged(Some(ref tier)) if tier == "C"
        ));
    }
}
