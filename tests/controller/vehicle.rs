//! Tests for the vehicle endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    model::catalog::{VehicleListDto, VehicleResponseDto},
    server::controller::vehicle::{get_vehicle, get_vehicles},
};

use super::*;

#[tokio::test]
async fn lists_vehicles() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_vehicle("Sand Crawler")
        .with_vehicle("T-16 skyhopper")
        .build()
        .await?;

    let result = get_vehicles(State(test.app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: VehicleListDto = body_json(resp).await;
    assert_eq!(body.vehicles.len(), 2);
    assert_eq!(body.vehicles[1].name, "T-16 skyhopper");

    Ok(())
}

/// Expect the vehicle's model alongside its name
#[tokio::test]
async fn gets_vehicle() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_vehicle("Sand Crawler")
        .build()
        .await?;

    let resp = get_vehicle(State(test.app_state()), Path(1))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: VehicleResponseDto = body_json(resp).await;
    assert_eq!(body.vehicle.name, "Sand Crawler");
    assert_eq!(body.vehicle.model, "Sand Crawler model");

    Ok(())
}

/// Expect 404 for a vehicle ID that does not exist
#[tokio::test]
async fn fails_for_nonexistent_vehicle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_vehicle(State(test.app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
