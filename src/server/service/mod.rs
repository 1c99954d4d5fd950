//! Service layer for business logic.
//!
//! Services coordinate repositories and turn database models into the public DTOs of
//! [`crate::model`]. Controllers only talk to services.

pub mod auth;
pub mod catalog;
pub mod user;
