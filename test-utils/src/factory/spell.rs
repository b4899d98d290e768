//! Spell factory for creating test spells.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test spells with customizable fields.
///
/// Defaults to a unique name and a description; `farm` is left empty.
pub struct SpellFactory<'a> {
    db: &'a DatabaseConnection,
    name: Option<String>,
    description: Option<String>,
    farm: Option<String>,
}

impl<'a> SpellFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: Some(format!("Spell {}", id)),
            description: Some("Deals damage to all enemies".to_string()),
            farm: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn farm(mut self, farm: impl Into<String>) -> Self {
        self.farm = Some(farm.into());
        self
    }

    pub async fn build(self) -> Result<entity::spell::Model, DbErr> {
        entity::spell::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            farm: ActiveValue::Set(self.farm),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a spell with default values.
pub async fn create_spell(db: &DatabaseConnection) -> Result<entity::spell::Model, DbErr> {
    SpellFactory::new(db).build().await
}
