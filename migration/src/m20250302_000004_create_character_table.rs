use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_null(Character::Name))
                    .col(json_null(Character::Tags))
                    .col(string_null(Character::Ability1))
                    .col(string_null(Character::Ability2))
                    .col(string_null(Character::Passive1))
                    .col(string_null(Character::Passive2))
                    .col(string_null(Character::Passive3))
                    .col(string_null(Character::Passive4))
                    .col(boolean_null(Character::Leader))
                    .col(integer_null(Character::Stars))
                    .col(integer_null(Character::GearTier))
                    .col(string_null(Character::Farm))
                    .col(integer_null(Character::UpgradeStones))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Name,
    Tags,
    Ability1,
    Ability2,
    Passive1,
    Passive2,
    Passive3,
    Passive4,
    Leader,
    Stars,
    GearTier,
    Farm,
    UpgradeStones,
}
