//! Character factory for creating test characters.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters with customizable fields.
///
/// Only the fields tests commonly care about have setters; abilities and passives are
/// filled with placeholder text.
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    name: Option<String>,
    tags: Vec<String>,
    leader: Option<bool>,
    stars: Option<i32>,
    gear_tier: Option<i32>,
    upgrade_stones: Option<i32>,
    farm: Option<String>,
}

impl<'a> CharacterFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: Some(format!("Character {}", id)),
            tags: vec!["attack".to_string()],
            leader: Some(false),
            stars: Some(3),
            gear_tier: Some(1),
            upgrade_stones: Some(0),
            farm: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn leader(mut self, leader: bool) -> Self {
        self.leader = Some(leader);
        self
    }

    pub fn stars(mut self, stars: i32) -> Self {
        self.stars = Some(stars);
        self
    }

    pub fn gear_tier(mut self, gear_tier: i32) -> Self {
        self.gear_tier = Some(gear_tier);
        self
    }

    pub fn upgrade_stones(mut self, upgrade_stones: i32) -> Self {
        self.upgrade_stones = Some(upgrade_stones);
        self
    }

    pub fn farm(mut self, farm: impl Into<String>) -> Self {
        self.farm = Some(farm.into());
        self
    }

    /// Builds and inserts the character entity into the database.
    ///
    /// Tags are stored as a JSON array.
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            name: ActiveValue::Set(self.name),
            tags: ActiveValue::Set(Some(serde_json::Value::from(self.tags))),
            ability1: ActiveValue::Set(Some("Strike".to_string())),
            ability2: ActiveValue::Set(Some("Guard".to_string())),
            passive1: ActiveValue::Set(None),
            passive2: ActiveValue::Set(None),
            passive3: ActiveValue::Set(None),
            passive4: ActiveValue::Set(None),
            leader: ActiveValue::Set(self.leader),
            stars: ActiveValue::Set(self.stars),
            gear_tier: ActiveValue::Set(self.gear_tier),
            farm: ActiveValue::Set(self.farm),
            upgrade_stones: ActiveValue::Set(self.upgrade_stones),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
pub async fn create_character(
    db: &DatabaseConnection,
) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn stores_tags_as_json_array() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Character).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let character = CharacterFactory::new(db)
            .tags(["support", "healer"])
            .build()
            .await?;

        assert_eq!(
            character.tags,
            Some(serde_json::json!(["support", "healer"]))
        );

        Ok(())
    }
}
