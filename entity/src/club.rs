use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "club")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub members: Option<i32>,
    /// Rank letter, see `ClubTier` on the server side.
    pub club_expedition_tier: Option<String>,
    pub forbidden_depths_raid_tier: Option<String>,
    pub siege_of_olympus_tier: Option<String>,
    pub alliance: Option<String>,
    pub contact_info: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
