use sea_orm::{sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

/// Inserts rows into the three favorite join tables.
///
/// Each pair is unique, adding a pair that already exists leaves the table unchanged.
/// Every method returns whether a new row was written.
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn add_person(&self, user_id: i32, person_id: i32) -> Result<bool, DbErr> {
        let rows = entity::prelude::UserPerson::insert(entity::user_person::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            person_id: ActiveValue::Set(person_id),
        })
        .on_conflict(
            OnConflict::columns([
                entity::user_person::Column::UserId,
                entity::user_person::Column::PersonId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(rows > 0)
    }

    pub async fn add_planet(&self, user_id: i32, planet_id: i32) -> Result<bool, DbErr> {
        let rows = entity::prelude::UserPlanet::insert(entity::user_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
        })
        .on_conflict(
            OnConflict::columns([
                entity::user_planet::Column::UserId,
                entity::user_planet::Column::PlanetId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(rows > 0)
    }

    pub async fn add_vehicle(&self, user_id: i32, vehicle_id: i32) -> Result<bool, DbErr> {
        let rows = entity::prelude::UserVehicle::insert(entity::user_vehicle::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
        })
        .on_conflict(
            OnConflict::columns([
                entity::user_vehicle::Column::UserId,
                entity::user_vehicle::Column::VehicleId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(rows > 0)
    }
}
