use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::server::model::db::{PersonModel, PlanetModel};

pub struct PersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PersonRepository<'a, C> {
    /// Creates a new instance of [`PersonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all people ordered by ID, each paired with their homeworld if set
    pub async fn get_all(&self) -> Result<Vec<(PersonModel, Option<PlanetModel>)>, DbErr> {
        entity::prelude::Person::find()
            .find_also_related(entity::prelude::Planet)
            .order_by_asc(entity::person::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        person_id: i32,
    ) -> Result<Option<(PersonModel, Option<PlanetModel>)>, DbErr> {
        entity::prelude::Person::find_by_id(person_id)
            .find_also_related(entity::prelude::Planet)
            .one(self.db)
            .await
    }

    /// Gets the people a user marked as favorite, ordered by ID
    pub async fn get_favorites_of_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<(PersonModel, Option<PlanetModel>)>, DbErr> {
        entity::prelude::Person::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::person::Relation::UserPerson.def(),
            )
            .filter(entity::user_person::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Planet)
            .order_by_asc(entity::person::Column::Id)
            .all(self.db)
            .await
    }
}
