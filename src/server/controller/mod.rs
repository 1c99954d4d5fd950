//! HTTP controller endpoints for the Holocron web API.
//!
//! Axum handlers for login, users and their favorites, the people, planet and vehicle
//! catalog, and the sitemap. Controllers validate inputs, call into the services and map
//! results onto the JSON envelopes of `crate::model`. Every handler carries a utoipa
//! annotation feeding the OpenAPI document served at `/api/docs`.

pub mod auth;
pub mod people;
pub mod planet;
pub mod sitemap;
pub mod user;
pub mod util;
pub mod vehicle;
