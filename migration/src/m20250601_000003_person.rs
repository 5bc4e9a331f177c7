use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000002_planet::Planet;

static IDX_PERSON_HOMEWORLD_ID: &str = "idx-person-homeworld_id";
static FK_PERSON_HOMEWORLD_ID: &str = "fk-person-homeworld_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline since SQLite cannot add them to an existing table
        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(pk_auto(Person::Id))
                    .col(string_len(Person::Name, 255))
                    .col(integer(Person::Height))
                    .col(string_len(Person::HairColor, 255))
                    .col(string_len(Person::SkinColor, 255))
                    .col(string_len(Person::EyeColor, 255))
                    .col(integer(Person::BirthYear))
                    .col(string_len(Person::Gender, 255))
                    .col(integer_null(Person::HomeworldId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PERSON_HOMEWORLD_ID)
                            .from(Person::Table, Person::HomeworldId)
                            .to(Planet::Table, Planet::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PERSON_HOMEWORLD_ID)
                    .table(Person::Table)
                    .col(Person::HomeworldId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PERSON_HOMEWORLD_ID)
                    .table(Person::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Person::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Person {
    Table,
    Id,
    Name,
    Height,
    HairColor,
    SkinColor,
    EyeColor,
    BirthYear,
    Gender,
    HomeworldId,
}
