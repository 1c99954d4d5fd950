use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::server::model::db::PlanetModel;

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// Gets the planets a user marked as favorite, ordered by ID
    pub async fn get_favorites_of_user(&self, user_id: i32) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::planet::Relation::UserPlanet.def(),
            )
            .filter(entity::user_planet::Column::UserId.eq(user_id))
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }
}
