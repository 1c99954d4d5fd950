//! Tests for the people endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    model::catalog::{CharacterListDto, CharacterResponseDto},
    server::controller::people::{get_people, get_person},
};
use serde_json::Value;

use super::*;

/// Expect 200 with every person under the `characters` key
#[tokio::test]
async fn lists_people() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_planet("Tatooine")
        .with_person("Luke Skywalker", Some("Tatooine"))
        .with_person("Yoda", None)
        .build()
        .await?;

    let result = get_people(State(test.app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: CharacterListDto = body_json(resp).await;
    assert_eq!(body.characters.len(), 2);
    assert_eq!(body.characters[0].homeworld.as_deref(), Some("Tatooine"));
    assert_eq!(body.characters[1].homeworld, None);

    Ok(())
}

/// Expect 200 with an empty list when the catalog holds no people
#[tokio::test]
async fn lists_no_people() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = get_people(State(test.app_state()))
        .await
        .unwrap()
        .into_response();

    let body: Value = body_json(resp).await;
    assert_eq!(body["characters"], Value::Array(Vec::new()));

    Ok(())
}

/// Expect 200 with the person under the `character` key
#[tokio::test]
async fn gets_person() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_person("Yoda", None)
        .build()
        .await?;

    let result = get_person(State(test.app_state()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: CharacterResponseDto = body_json(resp).await;
    assert_eq!(body.character.name, "Yoda");

    Ok(())
}

/// Expect 404 for a person ID that does not exist
#[tokio::test]
async fn fails_for_nonexistent_person() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_person(State(test.app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
