//! Tests running requests through the full router.
//!
//! These cover what handler-level tests cannot: path routing, JSON body extraction,
//! the bearer token requirement on `PUT /user` and the generated sitemap.

use axum::{
    body::Body,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method, Request, StatusCode,
    },
    Router,
};
use holocron::{
    model::{
        api::{EndpointDto, SitemapDto},
        auth::AccessTokenDto,
        user::UserResponseDto,
    },
    server::router::routes,
};
use holocron_test_utils::prelude::*;
use serde_json::json;
use tower::ServiceExt;

use crate::{util::body_json, TestContextExt};

async fn setup() -> Result<(TestContext, Router), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_planet("Tatooine")
        .with_planet("Alderaan")
        .with_planet("Yavin IV")
        .with_planet("Hoth")
        .with_user("luke")
        .build()
        .await?;
    let app = routes().with_state(test.app_state());

    Ok((test, app))
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Expect 401 from PUT /user without a bearer token, and no favorite stored
#[tokio::test]
async fn add_favorite_requires_bearer_token() -> Result<(), TestError> {
    let (_test, app) = setup().await?;

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/user",
            json!({ "user_id": 1, "id": 4, "type": "planet" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app
        .oneshot(Request::get("/user/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body: UserResponseDto = body_json(resp).await;
    assert!(body.user.planets.is_empty());

    Ok(())
}

/// Expect 401 from PUT /user with a token signed by another secret
#[tokio::test]
async fn add_favorite_rejects_foreign_token() -> Result<(), TestError> {
    let (_test, app) = setup().await?;
    let mut foreign = test_setup_with_tables!()?;
    foreign.jwt_secret = "another-secret".to_string();

    let mut request = json_request(
        Method::PUT,
        "/user",
        json!({ "user_id": 1, "id": 4, "type": "planet" }),
    );
    request.headers_mut().insert(
        AUTHORIZATION,
        format!("Bearer {}", foreign.bearer_token("luke"))
            .parse()
            .unwrap(),
    );

    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect a token from POST /login to authorize PUT /user
#[tokio::test]
async fn login_then_add_favorite() -> Result<(), TestError> {
    let (_test, app) = setup().await?;

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/login",
            json!({ "username": "luke", "password": TEST_PASSWORD }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let token: AccessTokenDto = body_json(resp).await;

    let mut request = json_request(
        Method::PUT,
        "/user",
        json!({ "user_id": 1, "id": 4, "type": "planet" }),
    );
    request.headers_mut().insert(
        AUTHORIZATION,
        format!("Bearer {}", token.access_token).parse().unwrap(),
    );
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: UserResponseDto = body_json(resp).await;
    assert_eq!(body.user.planets.len(), 1);
    assert_eq!(body.user.planets[0].id, 4);

    Ok(())
}

/// Expect 401 from POST /login for bad credentials
#[tokio::test]
async fn login_rejects_bad_credentials() -> Result<(), TestError> {
    let (_test, app) = setup().await?;

    let resp = app
        .oneshot(json_request(
            Method::POST,
            "/login",
            json!({ "username": "luke", "password": "wrong" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect the sitemap to list every API route
#[tokio::test]
async fn sitemap_lists_routes() -> Result<(), TestError> {
    let (_test, app) = setup().await?;

    let resp = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let sitemap: SitemapDto = body_json(resp).await;
    for (method, path) in [
        ("GET", "/"),
        ("POST", "/login"),
        ("GET", "/user"),
        ("PUT", "/user"),
        ("GET", "/user/{id}"),
        ("GET", "/people"),
        ("GET", "/people/{id}"),
        ("GET", "/planet"),
        ("GET", "/planet/{id}"),
        ("GET", "/vehicle"),
        ("GET", "/vehicle/{id}"),
        ("GET", "/api/docs"),
    ] {
        let endpoint = EndpointDto {
            method: method.to_string(),
            path: path.to_string(),
        };
        assert!(
            sitemap.endpoints.contains(&endpoint),
            "missing {} {}",
            method,
            path
        );
    }

    Ok(())
}

/// Expect the OpenAPI document to declare the bearer scheme
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let (_test, app) = setup().await?;

    let resp = app
        .oneshot(
            Request::get("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = body_json(resp).await;
    assert!(doc["components"]["securitySchemes"]["BearerAuth"].is_object());
    assert!(doc["paths"]["/user"]["put"].is_object());

    Ok(())
}

/// Expect 422 for a body field of the wrong type, with nothing stored
#[tokio::test]
async fn add_favorite_rejects_mistyped_field() -> Result<(), TestError> {
    let (test, app) = setup().await?;

    let mut request = json_request(
        Method::PUT,
        "/user",
        json!({ "user_id": "1", "id": 4, "type": "planet" }),
    );
    request.headers_mut().insert(
        AUTHORIZATION,
        format!("Bearer {}", test.bearer_token("luke")).parse().unwrap(),
    );

    let resp = app.clone().oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = app
        .oneshot(Request::get("/user/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body: UserResponseDto = body_json(resp).await;
    assert!(body.user.planets.is_empty());

    Ok(())
}

/// Expect the OpenAPI document to list the 422 of body-carrying routes
#[tokio::test]
async fn documents_unprocessable_body() -> Result<(), TestError> {
    let (_test, app) = setup().await?;

    let resp = app
        .oneshot(
            Request::get("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let doc: serde_json::Value = body_json(resp).await;
    assert!(doc["paths"]["/user"]["put"]["responses"]["422"].is_object());
    assert!(doc["paths"]["/login"]["post"]["responses"]["422"].is_object());

    Ok(())
}
