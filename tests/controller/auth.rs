//! Tests for the login endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use holocron::{
    model::{
        api::ErrorDto,
        auth::{AccessTokenDto, LoginDto},
    },
    server::controller::auth::login,
};

use super::*;

fn credentials(username: Option<&str>, password: Option<&str>) -> Json<LoginDto> {
    Json(LoginDto {
        username: username.map(str::to_string),
        password: password.map(str::to_string),
    })
}

/// Expect 200 with a token that validates for the submitted username
#[tokio::test]
async fn issues_token_for_valid_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("luke")
        .build()
        .await?;
    let state = test.app_state();

    let result = login(
        State(state.clone()),
        credentials(Some("luke"), Some(TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: AccessTokenDto = body_json(resp).await;
    let claims = state.jwt.verify(&body.access_token).unwrap();
    assert_eq!(claims.sub, "luke");

    Ok(())
}

/// Expect 401 with the error message and no token for a wrong password
#[tokio::test]
async fn fails_for_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("luke")
        .build()
        .await?;

    let result = login(
        State(test.app_state()),
        credentials(Some("luke"), Some("hunter2")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Bad username or password");

    Ok(())
}

/// Expect 401 for a username that does not exist
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = login(
        State(test.app_state()),
        credentials(Some("vader"), Some(TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 when the body carries no credentials
#[tokio::test]
async fn fails_for_missing_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("luke")
        .build()
        .await?;

    let result = login(State(test.app_state()), credentials(None, None)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 500 when required database tables are not present
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = login(
        State(test.app_state()),
        credentials(Some("luke"), Some(TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
