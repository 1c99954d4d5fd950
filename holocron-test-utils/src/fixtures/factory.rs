//! Factory functions for in-memory database models.
//!
//! These build models with standard test values without touching a database, for
//! unit tests of conversions and serialization.

use crate::{
    constant::TEST_PASSWORD,
    model::{PersonModel, PlanetModel, UserModel, VehicleModel},
};

pub fn mock_user_model(id: i32, username: &str) -> UserModel {
    UserModel {
        id,
        name: format!("{} (name)", username),
        username: username.to_string(),
        email: format!("{}@holonet.test", username),
        password: TEST_PASSWORD.to_string(),
        is_active: true,
    }
}

pub fn mock_planet_model(id: i32, name: &str) -> PlanetModel {
    PlanetModel {
        id,
        name: name.to_string(),
        diameter: Some("10465".to_string()),
        rotation_period: Some("23".to_string()),
        orbital_period: Some("304".to_string()),
        gravity: Some("1 standard".to_string()),
        population: Some("200000".to_string()),
        climate: Some("arid".to_string()),
        terrain: Some("desert".to_string()),
        surface_water: Some("1".to_string()),
        description: None,
        photo_url: None,
    }
}

pub fn mock_person_model(id: i32, name: &str, homeworld_id: Option<i32>) -> PersonModel {
    PersonModel {
        id,
        name: name.to_string(),
        height: Some("172".to_string()),
        mass: Some("77".to_string()),
        hair_color: Some("blond".to_string()),
        skin_color: Some("fair".to_string()),
        eye_color: Some("blue".to_string()),
        birth_year: Some("19BBY".to_string()),
        gender: Some("male".to_string()),
        description: None,
        photo_url: None,
        homeworld_id,
    }
}

pub fn mock_vehicle_model(id: i32, name: &str) -> VehicleModel {
    VehicleModel {
        id,
        name: name.to_string(),
        model: format!("{} model", name),
        vehicle_class: Some("wheeled".to_string()),
        manufacturer: Some("Corellia Mining Corporation".to_string()),
        cost_in_credits: Some("150000".to_string()),
        length: Some("36.8".to_string()),
        crew: Some("46".to_string()),
        passengers: Some("30".to_string()),
        max_atmosphering_speed: Some("30".to_string()),
        cargo_capacity: Some("50000".to_string()),
        consumables: Some("2 months".to_string()),
        description: None,
        photo_url: None,
    }
}
