//! Fixture helpers for inserting rows during test execution.
//!
//! - `catalog` - planets, people and vehicles
//! - `user` - users and their favorites
//! - `factory` - in-memory models that never touch the database

pub mod catalog;
pub mod factory;
pub mod user;
