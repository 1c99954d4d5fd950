use sea_orm::DatabaseConnection;

use crate::server::{
    config::{Config, DEFAULT_JWT_EXPIRES_MINUTES},
    model::auth::JwtKeys,
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt: JwtKeys,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            jwt: JwtKeys::new(&config.jwt_secret, config.jwt_expires_minutes),
        }
    }
}

/// Builds state from a connection and signing secret, used by the test harness.
impl From<(DatabaseConnection, String)> for AppState {
    fn from((db, jwt_secret): (DatabaseConnection, String)) -> Self {
        Self {
            db,
            jwt: JwtKeys::new(&jwt_secret, DEFAULT_JWT_EXPIRES_MINUTES),
        }
    }
}
