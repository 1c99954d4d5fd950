use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("User ID {0} not found")]
    UserNotFound(i32),
    #[error("No {kind} found with ID {id}")]
    ResourceNotFound { kind: &'static str, id: i32 },
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::MissingField(_) => StatusCode::BAD_REQUEST,
            Self::UserNotFound(_) | Self::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
