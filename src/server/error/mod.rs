//! Error types for the Holocron server.
//!
//! Domain errors (authentication, configuration, request validation) live in their own
//! modules and decide their own HTTP status. Everything else is logged and surfaced as
//! a generic 500 so storage or token library details never leak to API consumers.

pub mod auth;
pub mod config;
pub mod request;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, request::RequestError},
};

/// Main error type for the Holocron server.
///
/// Aggregates all domain-specific error types and external library errors so `?`
/// works across the repository, service and controller layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (bad credentials, missing or invalid bearer token).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Request error (missing fields, unknown user or resource).
    #[error(transparent)]
    RequestError(#[from] RequestError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Token signing error.
    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),
    /// I/O error while binding or serving.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - A required field of the request body is missing
/// - 401 Unauthorized - Bad credentials or missing/invalid bearer token
/// - 404 Not Found - The referenced user or resource does not exist
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::RequestError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
