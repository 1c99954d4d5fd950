use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251018_000003_vehicles::Vehicles, m20251018_000004_users::Users};

static FK_USER_VEHICLES_USER_ID: &str = "fk-user_vehicles-user_id";
static FK_USER_VEHICLES_VEHICLE_ID: &str = "fk-user_vehicles-vehicle_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserVehicles::Table)
                    .if_not_exists()
                    .col(integer(UserVehicles::UserId))
                    .col(integer(UserVehicles::VehicleId))
                    .primary_key(Index::create().col(UserVehicles::UserId).col(UserVehicles::VehicleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_VEHICLES_USER_ID)
                            .from(UserVehicles::Table, UserVehicles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_VEHICLES_VEHICLE_ID)
                            .from(UserVehicles::Table, UserVehicles::VehicleId)
                            .to(Vehicles::Table, Vehicles::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserVehicles::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserVehicles {
    Table,
    UserId,
    VehicleId,
}
