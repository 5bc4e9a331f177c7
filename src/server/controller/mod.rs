//! HTTP controller endpoints for the Holonet web API.
//!
//! Controllers are thin axum handlers: they extract path parameters and JSON bodies, call the
//! matching service and wrap the result in a status code and JSON body. Every handler is
//! annotated with `utoipa::path` so the router can collect an OpenAPI document, which also
//! drives the sitemap served at `/`.

pub mod favorite;
pub mod person;
pub mod planet;
pub mod sitemap;
pub mod starship;
pub mod user;
