use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(pk_auto(Planets::Id))
                    .col(string(Planets::Name))
                    .col(string_null(Planets::Diameter))
                    .col(string_null(Planets::RotationPeriod))
                    .col(string_null(Planets::OrbitalPeriod))
                    .col(string_null(Planets::Gravity))
                    .col(string_null(Planets::Population))
                    .col(string_null(Planets::Climate))
                    .col(string_null(Planets::Terrain))
                    .col(string_null(Planets::SurfaceWater))
                    .col(text_null(Planets::Description))
                    .col(string_null(Planets::PhotoUrl))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Planets {
    Table,
    Id,
    Name,
    Diameter,
    RotationPeriod,
    OrbitalPeriod,
    Gravity,
    Population,
    Climate,
    Terrain,
    SurfaceWater,
    Description,
    PhotoUrl,
}
