pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_news_table;
mod m20250301_000002_create_spell_table;
mod m20250301_000003_create_club_table;
mod m20250302_000004_create_character_table;
mod m20250302_000005_create_event_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_news_table::Migration),
            Box::new(m20250301_000002_create_spell_table::Migration),
            Box::new(m20250301_000003_create_club_table::Migration),
            Box::new(m20250302_000004_create_character_table::Migration),
            Box::new(m20250302_000005_create_event_table::Migration),
        ]
    }
}
