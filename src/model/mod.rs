//! Public JSON shapes returned and accepted by the API.

pub mod api;
pub mod auth;
pub mod catalog;
pub mod user;
