use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{CharacterListDto, CharacterResponseDto},
    },
    server::{
        error::{request::RequestError, Error},
        model::app::AppState,
        service::catalog::CatalogService,
    },
};

pub static PEOPLE_TAG: &str = "people";

/// List every person of the catalog
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "Success when listing people", body = CharacterListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let characters = CatalogService::new(&state.db).get_people().await?;

    Ok((
        StatusCode::OK,
        Json(CharacterListDto {
            msg: "These are characters".to_string(),
            characters,
        }),
    ))
}

/// Get a single person along with the name of their homeworld
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(("id" = i32, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Success when retrieving person", body = CharacterResponseDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let character = CatalogService::new(&state.db)
        .get_person(person_id)
        .await?
        .ok_or(RequestError::ResourceNotFound {
            kind: "person",
            id: person_id,
        })?;

    Ok((
        StatusCode::OK,
        Json(CharacterResponseDto {
            msg: "This is the character".to_string(),
            character,
        }),
    ))
}
