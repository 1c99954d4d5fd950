use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicles::Id))
                    .col(string(Vehicles::Name))
                    .col(string(Vehicles::Model))
                    .col(string_null(Vehicles::VehicleClass))
                    .col(string_null(Vehicles::Manufacturer))
                    .col(string_null(Vehicles::CostInCredits))
                    .col(string_null(Vehicles::Length))
                    .col(string_null(Vehicles::Crew))
                    .col(string_null(Vehicles::Passengers))
                    .col(string_null(Vehicles::MaxAtmospheringSpeed))
                    .col(string_null(Vehicles::CargoCapacity))
                    .col(string_null(Vehicles::Consumables))
                    .col(text_null(Vehicles::Description))
                    .col(string_null(Vehicles::PhotoUrl))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Vehicles {
    Table,
    Id,
    Name,
    Model,
    VehicleClass,
    Manufacturer,
    CostInCredits,
    Length,
    Crew,
    Passengers,
    MaxAtmospheringSpeed,
    CargoCapacity,
    Consumables,
    Description,
    PhotoUrl,
}
