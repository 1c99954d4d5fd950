//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main holocron crate so fixture return types
//! read the same in both places.

pub type UserModel = entity::user::Model;
pub type PersonModel = entity::person::Model;
pub type PlanetModel = entity::planet::Model;
pub type VehicleModel = entity::vehicle::Model;
