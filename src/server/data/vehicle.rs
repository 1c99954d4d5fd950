use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::server::model::db::VehicleModel;

pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    /// Creates a new instance of [`VehicleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<VehicleModel>, DbErr> {
        entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, vehicle_id: i32) -> Result<Option<VehicleModel>, DbErr> {
        entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await
    }

    /// Gets the vehicles a user marked as favorite, ordered by ID
    pub async fn get_favorites_of_user(&self, user_id: i32) -> Result<Vec<VehicleModel>, DbErr> {
        entity::prelude::Vehicle::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::vehicle::Relation::UserVehicle.def(),
            )
            .filter(entity::user_vehicle::Column::UserId.eq(user_id))
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await
    }
}
