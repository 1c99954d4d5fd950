use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{AddFavoriteDto, UserListDto, UserResponseDto},
    },
    server::{
        controller::util::bearer::AuthenticatedUser,
        error::{request::RequestError, Error},
        model::{app::AppState, favorite::FavoriteKind},
        service::user::{FavoriteOutcome, UserService},
    },
};

pub static USER_TAG: &str = "user";

/// List every user with their favorite people, planets and vehicles
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when listing users", body = UserListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).get_users().await?;

    Ok((
        StatusCode::OK,
        Json(UserListDto {
            msg: "These are the users".to_string(),
            users,
        }),
    ))
}

/// Get a single user with their favorites
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Success when retrieving user", body = UserResponseDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db)
        .get_user(user_id)
        .await?
        .ok_or(RequestError::UserNotFound(user_id))?;

    Ok((
        StatusCode::OK,
        Json(UserResponseDto {
            msg: "This is the user".to_string(),
            user,
        }),
    ))
}

/// Add a person, planet or vehicle to a user's favorites
///
/// `type` is one of `person` (or `character`), `planet` or `vehicle`. An unrecognized
/// type adds nothing and still returns the user. Adding a favorite the user already has
/// changes nothing.
///
/// # Responses
/// - 200 (OK): Favorite processed, body holds the refreshed user
/// - 400 (Bad Request): `user_id`, `id` or `type` missing from the body
/// - 401 (Unauthorized): Missing, invalid or expired bearer token
/// - 404 (Not Found): User or resource does not exist
#[utoipa::path(
    put,
    path = "/user",
    tag = USER_TAG,
    request_body = AddFavoriteDto,
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Favorite processed", body = UserResponseDto),
        (status = 400, description = "Missing field in request body", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "User or resource not found", body = ErrorDto),
        (status = 422, description = "Request body has a field of the wrong type", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(payload): Json<AddFavoriteDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = payload
        .user_id
        .ok_or(RequestError::MissingField("user_id"))?;
    let resource_id = payload.id.ok_or(RequestError::MissingField("id"))?;
    let kind = payload.kind.ok_or(RequestError::MissingField("type"))?;

    tracing::debug!(
        requested_by = %claims.sub,
        user_id = %user_id,
        resource_id = %resource_id,
        kind = %kind,
        "Adding favorite"
    );

    let (outcome, user) = UserService::new(&state.db)
        .add_favorite(user_id, resource_id, FavoriteKind::parse(&kind))
        .await?;

    let msg = match outcome {
        FavoriteOutcome::Added => "Resource added successfully",
        FavoriteOutcome::AlreadyPresent => "Resource already in favorites",
        FavoriteOutcome::UnknownKind => "Unrecognized resource type, nothing was added",
    };

    Ok((
        StatusCode::OK,
        Json(UserResponseDto {
            msg: msg.to_string(),
            user,
        }),
    ))
}
