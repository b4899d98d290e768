use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Club::Table)
                    .if_not_exists()
                    .col(pk_auto(Club::Id))
                    .col(string_null(Club::Name))
                    .col(integer_null(Club::Members))
                    .col(string_len_null(Club::ClubExpeditionTier, 1))
                    .col(string_len_null(Club::ForbiddenDepthsRaidTier, 1))
                    .col(string_len_null(Club::SiegeOfOlympusTier, 1))
                    .col(string_null(Club::Alliance))
                    .col(string_null(Club::ContactInfo))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Club::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Club {
    Table,
    Id,
    Name,
    Members,
    ClubExpeditionTier,
    ForbiddenDepthsRaidTier,
    SiegeOfOlympusTier,
    Alliance,
    ContactInfo,
}
