//! Tests for the add_favorite endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use holocron::{
    model::{
        api::ErrorDto,
        user::{AddFavoriteDto, UserResponseDto},
    },
    server::controller::{user::add_favorite, util::bearer::AuthenticatedUser},
};

use super::*;

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_catalog_tables()
        .with_planet("Tatooine")
        .with_planet("Alderaan")
        .with_planet("Yavin IV")
        .with_planet("Hoth")
        .with_person("Luke Skywalker", Some("Tatooine"))
        .with_vehicle("Sand Crawler")
        .with_user("luke")
        .build()
        .await
}

fn favorite(user_id: Option<i32>, id: Option<i32>, kind: Option<&str>) -> Json<AddFavoriteDto> {
    Json(AddFavoriteDto {
        user_id,
        id,
        kind: kind.map(str::to_string),
    })
}

/// Expect planet 4 among user 1's planets after adding it
#[tokio::test]
async fn adds_planet_to_user() -> Result<(), TestError> {
    let test = setup().await?;

    let result = add_favorite(
        State(test.app_state()),
        AuthenticatedUser(test.claims("luke")),
        favorite(Some(1), Some(4), Some("planet")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: UserResponseDto = body_json(resp).await;
    assert_eq!(body.msg, "Resource added successfully");
    assert!(body.user.planets.iter().any(|planet| planet.id == 4));

    Ok(())
}

/// Expect the `character` alias to add a person
#[tokio::test]
async fn adds_person_through_character_alias() -> Result<(), TestError> {
    let test = setup().await?;

    let resp = add_favorite(
        State(test.app_state()),
        AuthenticatedUser(test.claims("luke")),
        favorite(Some(1), Some(1), Some("character")),
    )
    .await
    .unwrap()
    .into_response();

    let body: UserResponseDto = body_json(resp).await;
    assert_eq!(body.user.characters.len(), 1);
    assert_eq!(body.user.characters[0].name, "Luke Skywalker");

    Ok(())
}

/// Expect a repeated call to leave exactly one entry
#[tokio::test]
async fn repeated_call_keeps_single_entry() -> Result<(), TestError> {
    let test = setup().await?;

    for _ in 0..2 {
        add_favorite(
            State(test.app_state()),
            AuthenticatedUser(test.claims("luke")),
            favorite(Some(1), Some(1), Some("vehicle")),
        )
        .await
        .unwrap();
    }
    let resp = add_favorite(
        State(test.app_state()),
        AuthenticatedUser(test.claims("luke")),
        favorite(Some(1), Some(1), Some("vehicle")),
    )
    .await
    .unwrap()
    .into_response();

    let body: UserResponseDto = body_json(resp).await;
    assert_eq!(body.msg, "Resource already in favorites");
    assert_eq!(body.user.vehicles.len(), 1);

    Ok(())
}

/// Expect 200 and an unchanged user for an unrecognized type
#[tokio::test]
async fn unknown_type_adds_nothing() -> Result<(), TestError> {
    let test = setup().await?;

    let resp = add_favorite(
        State(test.app_state()),
        AuthenticatedUser(test.claims("luke")),
        favorite(Some(1), Some(1), Some("starship")),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: UserResponseDto = body_json(resp).await;
    assert_eq!(body.msg, "Unrecognized resource type, nothing was added");
    assert!(body.user.characters.is_empty());
    assert!(body.user.planets.is_empty());
    assert!(body.user.vehicles.is_empty());

    Ok(())
}

/// Expect 400 naming the field for each absent field, with nothing stored
#[tokio::test]
async fn fails_for_missing_fields() -> Result<(), TestError> {
    let test = setup().await?;

    let cases = [
        (favorite(None, Some(4), Some("planet")), "user_id"),
        (favorite(Some(1), None, Some("planet")), "id"),
        (favorite(Some(1), Some(4), None), "type"),
    ];

    for (payload, field) in cases {
        let result = add_favorite(
            State(test.app_state()),
            AuthenticatedUser(test.claims("luke")),
            payload,
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorDto = body_json(resp).await;
        assert_eq!(body.error, format!("Missing required field: {}", field));
    }

    let state = test.app_state();
    let user = holocron::server::service::user::UserService::new(&state.db)
        .get_user(1)
        .await
        .unwrap()
        .unwrap();
    assert!(user.planets.is_empty());

    Ok(())
}

/// Expect 404 for a user ID that does not exist
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = setup().await?;

    let result = add_favorite(
        State(test.app_state()),
        AuthenticatedUser(test.claims("luke")),
        favorite(Some(5), Some(1), Some("planet")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 for a resource ID that does not exist
#[tokio::test]
async fn fails_for_nonexistent_resource() -> Result<(), TestError> {
    let test = setup().await?;

    let result = add_favorite(
        State(test.app_state()),
        AuthenticatedUser(test.claims("luke")),
        favorite(Some(1), Some(99), Some("person")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "No person found with ID 99");

    Ok(())
}
