use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Spell::Table)
                    .if_not_exists()
                    .col(pk_auto(Spell::Id))
                    .col(string_null(Spell::Name))
                    .col(text_null(Spell::Description))
                    .col(string_null(Spell::Farm))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Spell::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Spell {
    Table,
    Id,
    Name,
    Description,
    Farm,
}
