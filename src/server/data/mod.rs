//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for one table each, plus the favorite join tables.
//! They are generic over [`sea_orm::ConnectionTrait`] so they run on a pooled connection
//! or inside a transaction alike.

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
pub mod vehicle;
