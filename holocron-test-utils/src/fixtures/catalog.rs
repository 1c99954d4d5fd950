use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{PersonModel, PlanetModel, VehicleModel},
    TestContext,
};

impl TestContext {
    pub fn catalog<'a>(&'a mut self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_planet(&self, name: &str) -> Result<PlanetModel, TestError> {
        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                diameter: ActiveValue::Set(Some("10465".to_string())),
                climate: ActiveValue::Set(Some("arid".to_string())),
                terrain: ActiveValue::Set(Some("desert".to_string())),
                population: ActiveValue::Set(Some("200000".to_string())),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_person(
        &self,
        name: &str,
        homeworld_id: Option<i32>,
    ) -> Result<PersonModel, TestError> {
        Ok(
            entity::prelude::Person::insert(entity::person::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                height: ActiveValue::Set(Some("172".to_string())),
                mass: ActiveValue::Set(Some("77".to_string())),
                gender: ActiveValue::Set(Some("male".to_string())),
                birth_year: ActiveValue::Set(Some("19BBY".to_string())),
                homeworld_id: ActiveValue::Set(homeworld_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_vehicle(&self, name: &str) -> Result<VehicleModel, TestError> {
        Ok(
            entity::prelude::Vehicle::insert(entity::vehicle::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                model: ActiveValue::Set(format!("{} model", name)),
                vehicle_class: ActiveValue::Set(Some("wheeled".to_string())),
                crew: ActiveValue::Set(Some("46".to_string())),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
