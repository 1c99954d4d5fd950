//! SeaORM entities for the Holocron catalog schema.

pub mod prelude;

pub mod person;
pub mod planet;
pub mod user;
pub mod user_person;
pub mod user_planet;
pub mod user_vehicle;
pub mod vehicle;
