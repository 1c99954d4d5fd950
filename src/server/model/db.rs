//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate.

/// A user account. Holds the plaintext password, never serialize it directly.
pub type UserModel = entity::user::Model;

/// A person (character) of the catalog, optionally tied to a homeworld planet.
pub type PersonModel = entity::person::Model;

/// A planet of the catalog.
pub type PlanetModel = entity::planet::Model;

/// A vehicle of the catalog.
pub type VehicleModel = entity::vehicle::Model;
