//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications. The generated
//! document backs both the Swagger UI at `/api/docs` and the sitemap served at `/`.

use std::sync::Arc;

use axum::{Extension, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, util::bearer::BEARER_AUTH},
    model::app::AppState,
};

static DOCS_PATH: &str = "/api/docs";

/// Registers the bearer token scheme used by routes that modify data.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.security_schemes.insert(
            BEARER_AUTH.to_string(),
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some(
                        "Access token issued by `POST /login`, sent as \
                        `Authorization: Bearer <token>`.",
                    ))
                    .build(),
            ),
        );
    }
}

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /` - Sitemap listing every endpoint
/// - `POST /login` - Exchange credentials for an access token
/// - `GET /user` - List users with their favorites
/// - `PUT /user` - Add a favorite to a user (bearer token required)
/// - `GET /user/{id}` - Get a single user
/// - `GET /people`, `GET /people/{id}` - People of the catalog
/// - `GET /planet`, `GET /planet/{id}` - Planets of the catalog
/// - `GET /vehicle`, `GET /vehicle/{id}` - Vehicles of the catalog
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`. Requests are traced
/// with `tower-http` and CORS is open to every origin.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, jwt };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Holocron", description = "Star Wars favorites catalog API"),
        modifiers(&SecurityAddon),
        tags(
            (name = controller::sitemap::SITEMAP_TAG, description = "Route map"),
            (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
            (name = controller::user::USER_TAG, description = "Users and their favorites"),
            (name = controller::people::PEOPLE_TAG, description = "People of the catalog"),
            (name = controller::planet::PLANET_TAG, description = "Planets of the catalog"),
            (name = controller::vehicle::VEHICLE_TAG, description = "Vehicles of the catalog"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::sitemap::sitemap))
        .routes(routes!(controller::auth::login))
        .routes(routes!(
            controller::user::get_users,
            controller::user::add_favorite
        ))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::people::get_people))
        .routes(routes!(controller::people::get_person))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::vehicle::get_vehicles))
        .routes(routes!(controller::vehicle::get_vehicle))
        .split_for_parts();

    let sitemap = controller::sitemap::build_sitemap(&api, DOCS_PATH);

    routes
        .layer(Extension(Arc::new(sitemap)))
        .merge(SwaggerUi::new(DOCS_PATH).url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
