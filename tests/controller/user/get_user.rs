//! Tests for the get_user endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    model::{
        api::ErrorDto,
        user::{UserListDto, UserResponseDto},
    },
    server::controller::user::{get_user, get_users},
};

use super::*;

/// Expect the same serialized user as the matching element of GET /user
#[tokio::test]
async fn matches_user_list_element() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .with_planet("Tatooine")
        .with_person("Luke Skywalker", Some("Tatooine"))
        .with_vehicle("X-34 Landspeeder")
        .with_user("luke")
        .with_user("leia")
        .build()
        .await?;
    test.user().insert_favorite_person(2, 1).await?;
    test.user().insert_favorite_vehicle(2, 1).await?;

    let list_resp = get_users(State(test.app_state()))
        .await
        .unwrap()
        .into_response();
    let list: UserListDto = body_json(list_resp).await;

    let result = get_user(State(test.app_state()), Path(2)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: UserResponseDto = body_json(resp).await;
    assert_eq!(body.user, list.users[1]);
    assert_eq!(body.user.characters[0].homeworld.as_deref(), Some("Tatooine"));

    Ok(())
}

/// Expect 404 for a user ID that does not exist
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_user(State(test.app_state()), Path(7)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "User ID 7 not found");

    Ok(())
}
