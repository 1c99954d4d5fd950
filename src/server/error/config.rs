use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Errors raised while reading [`Config`](crate::server::config::Config) from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable {0} must be set")]
    MissingEnvVar(String),
    #[error("Environment variable {var} has an invalid value: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

/// Configuration is only read at startup, reaching a handler with one is a server fault.
impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
