//! Read access to the people, planets and vehicles of the catalog.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::{PersonDto, PlanetDto, VehicleDto},
    server::{
        data::{person::PersonRepository, planet::PlanetRepository, vehicle::VehicleRepository},
        error::Error,
        model::db::{PersonModel, PlanetModel, VehicleModel},
    },
};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_people(&self) -> Result<Vec<PersonDto>, Error> {
        let people = PersonRepository::new(self.db).get_all().await?;

        Ok(people
            .into_iter()
            .map(|(person, homeworld)| person_dto(person, homeworld))
            .collect())
    }

    pub async fn get_person(&self, person_id: i32) -> Result<Option<PersonDto>, Error> {
        let person = PersonRepository::new(self.db).get_by_id(person_id).await?;

        Ok(person.map(|(person, homeworld)| person_dto(person, homeworld)))
    }

    pub async fn get_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(planet_dto).collect())
    }

    pub async fn get_planet(&self, planet_id: i32) -> Result<Option<PlanetDto>, Error> {
        let planet = PlanetRepository::new(self.db).get_by_id(planet_id).await?;

        Ok(planet.map(planet_dto))
    }

    pub async fn get_vehicles(&self) -> Result<Vec<VehicleDto>, Error> {
        let vehicles = VehicleRepository::new(self.db).get_all().await?;

        Ok(vehicles.into_iter().map(vehicle_dto).collect())
    }

    pub async fn get_vehicle(&self, vehicle_id: i32) -> Result<Option<VehicleDto>, Error> {
        let vehicle = VehicleRepository::new(self.db).get_by_id(vehicle_id).await?;

        Ok(vehicle.map(vehicle_dto))
    }
}

/// Public view of a person, `homeworld` carries the planet name.
pub(crate) fn person_dto(person: PersonModel, homeworld: Option<PlanetModel>) -> PersonDto {
    PersonDto {
        id: person.id,
        name: person.name,
        height: person.height,
        mass: person.mass,
        hair_color: person.hair_color,
        skin_color: person.skin_color,
        eye_color: person.eye_color,
        birth_year: person.birth_year,
        gender: person.gender,
        description: person.description,
        photo_url: person.photo_url,
        homeworld_id: person.homeworld_id,
        homeworld: homeworld.map(|planet| planet.name),
    }
}

pub(crate) fn planet_dto(planet: PlanetModel) -> PlanetDto {
    PlanetDto {
        id: planet.id,
        name: planet.name,
        diameter: planet.diameter,
        rotation_period: planet.rotation_period,
        orbital_period: planet.orbital_period,
        gravity: planet.gravity,
        population: planet.population,
        climate: planet.climate,
        terrain: planet.terrain,
        surface_water: planet.surface_water,
        description: planet.description,
        photo_url: planet.photo_url,
    }
}

pub(crate) fn vehicle_dto(vehicle: VehicleModel) -> VehicleDto {
    VehicleDto {
        id: vehicle.id,
        name: vehicle.name,
        model: vehicle.model,
        vehicle_class: vehicle.vehicle_class,
        manufacturer: vehicle.manufacturer,
        cost_in_credits: vehicle.cost_in_credits,
        length: vehicle.length,
        crew: vehicle.crew,
        passengers: vehicle.passengers,
        max_atmosphering_speed: vehicle.max_atmosphering_speed,
        cargo_capacity: vehicle.cargo_capacity,
        consumables: vehicle.consumables,
        description: vehicle.description,
        photo_url: vehicle.photo_url,
    }
}
