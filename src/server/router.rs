//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. The OpenAPI document is served at `/api/docs/openapi.json` and the list of
//! its paths doubles as the sitemap served at `/`.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{controller, model::app::AppState};

/// Path the OpenAPI document is served at
pub static OPENAPI_PATH: &str = "/api/docs/openapi.json";

/// Builds the application's HTTP router with all API endpoints.
///
/// Handlers sharing a path are registered together so utoipa merges them into one path
/// item. The collected OpenAPI document is then used for two extra routes:
///
/// - `GET /` - Sitemap listing every API endpoint with its method
/// - `GET /api/docs/openapi.json` - The OpenAPI document itself
///
/// # Returns
/// An Axum `Router<AppState>` that still needs its state provided via `with_state`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holonet", description = "Holonet Star Wars catalogue API"), tags(
        (name = controller::user::USER_TAG, description = "User registration and lookup"),
        (name = controller::planet::PLANET_TAG, description = "Planet catalogue"),
        (name = controller::person::PEOPLE_TAG, description = "People catalogue"),
        (name = controller::starship::STARSHIP_TAG, description = "Starship catalogue"),
        (name = controller::favorite::FAVORITE_TAG, description = "User favorites"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user
        ))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::favorite::get_user_favorites))
        .routes(routes!(
            controller::planet::get_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(
            controller::person::get_people,
            controller::person::create_person
        ))
        .routes(routes!(controller::person::get_person))
        .routes(routes!(controller::starship::create_starship))
        .routes(routes!(controller::starship::get_starships))
        .routes(routes!(controller::starship::get_starship))
        .routes(routes!(
            controller::favorite::add_favorite,
            controller::favorite::remove_favorite
        ))
        .split_for_parts();

    let sitemap = controller::sitemap::build_sitemap(&api);

    routes
        .route(
            "/",
            get(move || {
                let sitemap = sitemap.clone();
                async move { Json(sitemap) }
            }),
        )
        .route(
            OPENAPI_PATH,
            get(move || {
                let api = api.clone();
                async move { Json(api) }
            }),
        )
}
