use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Bad username or password")]
    InvalidCredentials,
    #[error("Authorization header with a bearer token is missing")]
    MissingBearerToken,
    #[error("Bearer token failed validation: {0}")]
    InvalidBearerToken(jsonwebtoken::errors::Error),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::InvalidCredentials => "Bad username or password",
            Self::MissingBearerToken => "Missing authorization token",
            Self::InvalidBearerToken(_) => "Invalid or expired authorization token",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
