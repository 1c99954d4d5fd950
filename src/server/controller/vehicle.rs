use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{VehicleListDto, VehicleResponseDto},
    },
    server::{
        error::{request::RequestError, Error},
        model::app::AppState,
        service::catalog::CatalogService,
    },
};

pub static VEHICLE_TAG: &str = "vehicle";

/// List every vehicle of the catalog
#[utoipa::path(
    get,
    path = "/vehicle",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "Success when listing vehicles", body = VehicleListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let vehicles = CatalogService::new(&state.db).get_vehicles().await?;

    Ok((
        StatusCode::OK,
        Json(VehicleListDto {
            msg: "These are vehicles".to_string(),
            vehicles,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/vehicle/{id}",
    tag = VEHICLE_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Success when retrieving vehicle", body = VehicleResponseDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let vehicle = CatalogService::new(&state.db)
        .get_vehicle(vehicle_id)
        .await?
        .ok_or(RequestError::ResourceNotFound {
            kind: "vehicle",
            id: vehicle_id,
        })?;

    Ok((
        StatusCode::OK,
        Json(VehicleResponseDto {
            msg: "This is the vehicle".to_string(),
            vehicle,
        }),
    ))
}
