use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AccessTokenDto, LoginDto},
    },
    server::{error::Error, model::app::AppState, service::auth::AuthService},
};

pub static AUTH_TAG: &str = "auth";

/// Exchange a username and password for an access token
///
/// The token is an HS256 JWT with the username as subject, to be sent as
/// `Authorization: Bearer <token>` on routes that modify data.
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials accepted", body = AccessTokenDto),
        (status = 401, description = "Bad username or password", body = ErrorDto),
        (status = 422, description = "Request body has a field of the wrong type", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.jwt);

    let access_token = auth_service
        .login(payload.username.as_deref(), payload.password.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(AccessTokenDto { access_token })))
}
