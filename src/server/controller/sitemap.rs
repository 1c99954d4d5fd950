use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, Extension, Json};
use utoipa::openapi::OpenApi;

use crate::model::api::{EndpointDto, SitemapDto};

pub static SITEMAP_TAG: &str = "sitemap";

/// Lists every route of the API
#[utoipa::path(
    get,
    path = "/",
    tag = SITEMAP_TAG,
    responses(
        (status = 200, description = "Every route the API exposes", body = SitemapDto),
    ),
)]
pub async fn sitemap(Extension(sitemap): Extension<Arc<SitemapDto>>) -> impl IntoResponse {
    (StatusCode::OK, Json(sitemap.as_ref().clone()))
}

/// Builds the sitemap from the paths of an OpenAPI document
///
/// Endpoints are ordered by path, then by method. The Swagger UI is appended since it is
/// not part of the document itself.
pub fn build_sitemap(api: &OpenApi, docs_path: &str) -> SitemapDto {
    let mut endpoints = Vec::new();

    for (path, item) in &api.paths.paths {
        let operations = [
            ("GET", &item.get),
            ("POST", &item.post),
            ("PUT", &item.put),
            ("PATCH", &item.patch),
            ("DELETE", &item.delete),
        ];

        for (method, operation) in operations {
            if operation.is_some() {
                endpoints.push(EndpointDto {
                    method: method.to_string(),
                    path: path.clone(),
                });
            }
        }
    }

    endpoints.push(EndpointDto {
        method: "GET".to_string(),
        path: docs_path.to_string(),
    });

    SitemapDto {
        msg: "Welcome to the Holocron API, these are the available endpoints".to_string(),
        endpoints,
    }
}
