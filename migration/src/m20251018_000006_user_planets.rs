use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251018_000001_planets::Planets, m20251018_000004_users::Users};

static FK_USER_PLANETS_USER_ID: &str = "fk-user_planets-user_id";
static FK_USER_PLANETS_PLANET_ID: &str = "fk-user_planets-planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserPlanets::Table)
                    .if_not_exists()
                    .col(integer(UserPlanets::UserId))
                    .col(integer(UserPlanets::PlanetId))
                    .primary_key(Index::create().col(UserPlanets::UserId).col(UserPlanets::PlanetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_PLANETS_USER_ID)
                            .from(UserPlanets::Table, UserPlanets::UserId)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_PLANETS_PLANET_ID)
                            .from(UserPlanets::Table, UserPlanets::PlanetId)
                            .to(Planets::Table, Planets::Id)
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
            .drop_table(Table::drop().table(UserPlanets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserPlanets {
    Table,
    UserId,
    PlanetId,
}
