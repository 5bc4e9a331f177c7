use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Starship::Table)
                    .if_not_exists()
                    .col(pk_auto(Starship::Id))
                    .col(string_len(Starship::Name, 255))
                    .col(string_len(Starship::Model, 255))
                    .col(string_len(Starship::StarshipClass, 255))
                    .col(string_len(Starship::Manufacturer, 255))
                    .col(big_integer(Starship::CostInCredits))
                    .col(integer(Starship::Length))
                    .col(string_len(Starship::Consumables, 255))
                    .col(integer(Starship::Passengers))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Starship::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Starship {
    Table,
    Id,
    Name,
    Model,
    StarshipClass,
    Manufacturer,
    CostInCredits,
    Length,
    Consumables,
    Passengers,
}
