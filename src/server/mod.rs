//! Server application core modules.
//!
//! This module contains all server-side functionality for the Holocron API: configuration,
//! HTTP routing and controllers, services, database repositories and startup. It serves a
//! catalog of Star Wars people, planets and vehicles along with users and their favorites.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
