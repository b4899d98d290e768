//! Club factory for creating test clubs.
//!
//! Tier columns are stored as rank letters; the factory takes them as plain strings so
//! tests can also insert values the server would reject.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clubs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::club::ClubFactory;
///
/// let club = ClubFactory::new(&db)
///     .name("Olympians")
///     .members(30)
///     .club_expedition_tier("S")
///     .build()
///     .await?;
/// ```
pub struct ClubFactory<'a> {
    db: &'a DatabaseConnection,
    name: Option<String>,
    members: Option<i32>,
    club_expedition_tier: Option<String>,
    forbidden_depths_raid_tier: Option<String>,
    siege_of_olympus_tier: Option<String>,
    alliance: Option<String>,
    contact_info: Option<String>,
}

impl<'a> ClubFactory<'a> {
    /// Creates a new ClubFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Club {id}"` where id is auto-incremented
    /// - members: `10`
    /// - every tier: `"C"`
    /// - alliance and contact info: unset
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ClubFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: Some(format!("Club {}", id)),
            members: Some(10),
            club_expedition_tier: Some("C".to_string()),
            forbidden_depths_raid_tier: Some("C".to_string()),
            siege_of_olympus_tier: Some("C".to_string()),
            alliance: None,
            contact_info: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn members(mut self, members: i32) -> Self {
        self.members = Some(members);
        self
    }

    pub fn club_expedition_tier(mut self, tier: impl Into<String>) -> Self {
        self.club_expedition_tier = Some(tier.into());
        self
    }

    pub fn forbidden_depths_raid_tier(mut self, tier: impl Into<String>) -> Self {
        self.forbidden_depths_raid_tier = Some(tier.into());
        self
    }

    pub fn siege_of_olympus_tier(mut self, tier: impl Into<String>) -> Self {
        self.siege_of_olympus_tier = Some(tier.into());
        self
    }

    pub fn alliance(mut self, alliance: impl Into<String>) -> Self {
        self.alliance = Some(alliance.into());
        self
    }

    pub fn contact_info(mut self, contact_info: impl Into<String>) -> Self {
        self.contact_info = Some(contact_info.into());
        self
    }

    /// Builds and inserts the club entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::club::Model)` - Created club entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::club::Model, DbErr> {
        entity::club::ActiveModel {
            name: ActiveValue::Set(self.name),
            members: ActiveValue::Set(self.members),
            club_expedition_tier: ActiveValue::Set(self.club_expedition_tier),
            forbidden_depths_raid_tier: ActiveValue::Set(self.forbidden_depths_raid_tier),
            siege_of_olympus_tier: ActiveValue::Set(self.siege_of_olympus_tier),
            alliance: ActiveValue::Set(self.alliance),
            contact_info: ActiveValue::Set(self.contact_info),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a club with default values.
///
/// Shorthand for `ClubFactory::new(db).build().await`.
pub async fn create_club(db: &DatabaseConnection) -> Result<entity::club::Model, DbErr> {
    ClubFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_club_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Club).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let club = ClubFactory::new(db)
            .name("Olympians")
            .members(30)
            .siege_of_olympus_tier("S")
            .alliance("North")
            .build()
            .await?;

        assert_eq!(club.name.as_deref(), Some("Olympians"));
        assert_eq!(club.members, Some(30));
        assert_eq!(club.siege_of_olympus_tier.as_deref(), Some("S"));
        assert_eq!(club.club_expedition_tier.as_deref(), Some("C"));
        assert_eq!(club.alliance.as_deref(), Some("North"));
        assert_eq!(club.contact_info, None);

        Ok(())
    }
}
