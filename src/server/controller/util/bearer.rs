use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, auth::Claims},
};

/// Name of the bearer security scheme in the OpenAPI document
pub static BEARER_AUTH: &str = "BearerAuth";

/// Claims of a request authenticated with `Authorization: Bearer <token>`
///
/// Rejects the request with a 401 when the header is missing, is not a bearer token or
/// carries a token that fails signature or expiry validation.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Claims);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Error> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingBearerToken)?;

        let claims = state
            .jwt
            .verify(token)
            .map_err(AuthError::InvalidBearerToken)?;

        Ok(Self(claims))
    }
}
