use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{PlanetListDto, PlanetResponseDto},
    },
    server::{
        error::{request::RequestError, Error},
        model::app::AppState,
        service::catalog::CatalogService,
    },
};

pub static PLANET_TAG: &str = "planet";

/// List every planet of the catalog
#[utoipa::path(
    get,
    path = "/planet",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when listing planets", body = PlanetListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = CatalogService::new(&state.db).get_planets().await?;

    Ok((
        StatusCode::OK,
        Json(PlanetListDto {
            msg: "These are planets".to_string(),
            planets,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/planet/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Success when retrieving planet", body = PlanetResponseDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet = CatalogService::new(&state.db)
        .get_planet(planet_id)
        .await?
        .ok_or(RequestError::ResourceNotFound {
            kind: "planet",
            id: planet_id,
        })?;

    Ok((
        StatusCode::OK,
        Json(PlanetResponseDto {
            msg: "This is the planet".to_string(),
            planet,
        }),
    ))
}
