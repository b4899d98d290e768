use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    /// JSON array of tag strings.
    pub tags: Option<Json>,
    pub ability1: Option<String>,
    pub ability2: Option<String>,
    pub passive1: Option<String>,
    pub passive2: Option<String>,
    pub passive3: Option<String>,
    pub passive4: Option<String>,
    pub leader: Option<bool>,
    pub stars: Option<i32>,
    pub gear_tier: Option<i32>,
    pub farm: Option<String>,
    pub upgrade_stones: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
