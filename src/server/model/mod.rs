//! Server application models and type definitions.
//!
//! Application state, database model type aliases, access token handling and the
//! favorite kinds accepted by `PUT /user`.

pub mod app;
pub mod auth;
pub mod db;
pub mod favorite;
