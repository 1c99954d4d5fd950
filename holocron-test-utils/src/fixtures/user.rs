use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PASSWORD, error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user, deriving name and email from the username.
    pub async fn insert_user(&self, username: &str) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                name: ActiveValue::Set(format!("{} (name)", username)),
                username: ActiveValue::Set(username.to_string()),
                email: ActiveValue::Set(format!("{}@holonet.test", username)),
                password: ActiveValue::Set(TEST_PASSWORD.to_string()),
                is_active: ActiveValue::Set(true),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_favorite_person(
        &self,
        user_id: i32,
        person_id: i32,
    ) -> Result<(), TestError> {
        entity::prelude::UserPerson::insert(entity::user_person::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            person_id: ActiveValue::Set(person_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(())
    }

    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<(), TestError> {
        entity::prelude::UserPlanet::insert(entity::user_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(())
    }

    pub async fn insert_favorite_vehicle(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<(), TestError> {
        entity::prelude::UserVehicle::insert(entity::user_vehicle::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(())
    }
}
