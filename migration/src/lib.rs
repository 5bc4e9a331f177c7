pub use sea_orm_migration::prelude::*;

mod m20250601_000001_user;
mod m20250601_000002_planet;
mod m20250601_000003_person;
mod m20250601_000004_starship;
mod m20250601_000005_favorite;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_user::Migration),
            Box::new(m20250601_000002_planet::Migration),
            Box::new(m20250601_000003_person::Migration),
            Box::new(m20250601_000004_starship::Migration),
            Box::new(m20250601_000005_favorite::Migration),
        ]
    }
}
