pub use super::person::Entity as Person;
pub use super::planet::Entity as Planet;
pub use super::user::Entity as User;
pub use super::user_person::Entity as UserPerson;
pub use super::user_planet::Entity as UserPlanet;
pub use super::user_vehicle::Entity as UserVehicle;
pub use super::vehicle::Entity as Vehicle;
