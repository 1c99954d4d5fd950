use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251018_000002_people::People, m20251018_000004_users::Users};

static FK_USER_PEOPLE_USER_ID: &str = "fk-user_people-user_id";
static FK_USER_PEOPLE_PERSON_ID: &str = "fk-user_people-person_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserPeople::Table)
                    .if_not_exists()
                    .col(integer(UserPeople::UserId))
                    .col(integer(UserPeople::PersonId))
                    .primary_key(Index::create().col(UserPeople::UserId).col(UserPeople::PersonId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_PEOPLE_USER_ID)
                            .from(UserPeople::Table, UserPeople::UserId)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_PEOPLE_PERSON_ID)
                            .from(UserPeople::Table, UserPeople::PersonId)
                            .to(People::Table, People::Id)
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
            .drop_table(Table::drop().table(UserPeople::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserPeople {
    Table,
    UserId,
    PersonId,
}
