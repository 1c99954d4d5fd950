use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251018_000001_planets::Planets;

static IDX_PEOPLE_HOMEWORLD_ID: &str = "idx-people-homeworld_id";
static FK_PEOPLE_HOMEWORLD_ID: &str = "fk-people-homeworld_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(pk_auto(People::Id))
                    .col(string(People::Name))
                    .col(string_null(People::Height))
                    .col(string_null(People::Mass))
                    .col(string_null(People::HairColor))
                    .col(string_null(People::SkinColor))
                    .col(string_null(People::EyeColor))
                    .col(string_null(People::BirthYear))
                    .col(string_null(People::Gender))
                    .col(text_null(People::Description))
                    .col(string_null(People::PhotoUrl))
                    .col(integer_null(People::HomeworldId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PEOPLE_HOMEWORLD_ID)
                            .from(People::Table, People::HomeworldId)
                            .to(Planets::Table, Planets::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PEOPLE_HOMEWORLD_ID)
                    .table(People::Table)
                    .col(People::HomeworldId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PEOPLE_HOMEWORLD_ID)
                    .table(People::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum People {
    Table,
    Id,
    Name,
    Height,
    Mass,
    HairColor,
    SkinColor,
    EyeColor,
    BirthYear,
    Gender,
    Description,
    PhotoUrl,
    HomeworldId,
}
