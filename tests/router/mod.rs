//! Tests driving the complete router, covering extraction, routing and the sitemap.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    response::Response,
    Router,
};
use holonet::server::{model::app::AppState, router::routes};
use holonet_test_utils::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::util::body_json;

fn app(test: &TestContext) -> Router {
    routes().with_state(test.to_app_state::<AppState>())
}

async fn send(test: &TestContext, method: Method, uri: &str, body: Option<Value>) -> Response {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    app(test).oneshot(request).await.unwrap()
}

/// Tests that the sitemap lists the API routes with their methods.
///
/// Expected: 200 with GET and POST entries for `/users` and the favorite routes
#[tokio::test]
async fn serves_sitemap() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = send(&test, Method::GET, "/", None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let endpoints = body_json(resp).await["endpoints"].clone();
    let endpoints = endpoints.as_array().unwrap();
    for (method, path) in [
        ("GET", "/users"),
        ("POST", "/users"),
        ("GET", "/user/{user_id}/favorites"),
        ("POST", "/starship"),
        ("GET", "/starships"),
        ("POST", "/favorite/{kind}/{user_id}/{target_id}"),
        ("DELETE", "/favorite/{kind}/{user_id}/{target_id}"),
    ] {
        assert!(
            endpoints.contains(&json!({ "method": method, "path": path })),
            "sitemap is missing {method} {path}"
        );
    }

    Ok(())
}

/// Tests that the OpenAPI document is served.
///
/// Expected: 200 with the registered paths
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = send(&test, Method::GET, "/api/docs/openapi.json", None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["paths"]["/planet/{planet_id}"]["get"].is_object());

    Ok(())
}

/// Tests registering a user through the router and reading them back.
///
/// Expected: 201 then 200, the password is never returned
#[tokio::test]
async fn registers_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = send(
        &test,
        Method::POST,
        "/users",
        Some(json!({
            "username": "rey",
            "email": "rey@jakku.org",
            "password": "scavenger"
        })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = send(&test, Method::GET, "/users/1", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["username"], "rey");
    assert!(body.get("password").is_none());

    Ok(())
}

/// Tests a body missing a required field.
///
/// Expected: 400 with kind `validation`
#[tokio::test]
async fn rejects_body_missing_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = send(
        &test,
        Method::POST,
        "/users",
        Some(json!({ "username": "rey", "email": "rey@jakku.org" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["kind"], "validation");

    let resp = send(
        &test,
        Method::POST,
        "/planets",
        Some(json!({ "name": "Jakku" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["kind"], "validation");

    Ok(())
}

/// Tests a field with the wrong type.
///
/// Expected: 400 with kind `validation`
#[tokio::test]
async fn rejects_body_with_wrong_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = send(
        &test,
        Method::POST,
        "/people",
        Some(json!({
            "name": "Chewbacca",
            "height": "tall",
            "hair_color": "brown",
            "skin_color": "unknown",
            "eye_color": "blue",
            "birth_year": 200,
            "gender": "male"
        })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["kind"], "validation");

    Ok(())
}

/// Tests that the misspelled `manufacter` key is accepted for starships.
///
/// Expected: 201 with the value under `manufacturer`
#[tokio::test]
async fn accepts_manufacter_key() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = send(
        &test,
        Method::POST,
        "/starship",
        Some(json!({
            "name": "Slave I",
            "model": "Firespray-31",
            "starship_class": "patrol craft",
            "manufacter": "Kuat Systems Engineering",
            "cost_in_credits": 150000,
            "length": 21,
            "consumables": "1 month",
            "passengers": 6
        })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(resp).await["manufacturer"],
        "Kuat Systems Engineering"
    );

    Ok(())
}

/// Tests the full favorite lifecycle for a starship through the router.
///
/// Expected: 201, 200 on repeat, listed once, 200 on delete, 404 on repeated delete
#[tokio::test]
async fn favorite_lifecycle() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_user("luke")
        .with_starship("X-wing")
        .build()
        .await?;

    let resp = send(&test, Method::POST, "/favorite/starship/1/1", None).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let resp = send(&test, Method::POST, "/favorite/starship/1/1", None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&test, Method::GET, "/user/1/favorites", None).await;
    assert_eq!(
        body_json(resp).await["favorites"],
        json!([{ "starship": {
            "id": 1,
            "name": "X-wing",
            "model": "YT-1300 light freighter",
            "starship_class": "Light freighter",
            "manufacturer": "Corellian Engineering Corporation",
            "cost_in_credits": 100000,
            "length": 34,
            "consumables": "2 months",
            "passengers": 6
        }}])
    );

    let resp = send(&test, Method::DELETE, "/favorite/starship/1/1", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = send(&test, Method::DELETE, "/favorite/starship/1/1", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests an unknown favorite kind segment and a non-integer ID.
///
/// Expected: 400 with kind `validation` for both
#[tokio::test]
async fn rejects_invalid_favorite_path() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_user("luke")
        .build()
        .await?;

    let resp = send(&test, Method::POST, "/favorite/vehicle/1/1", None).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["kind"], "validation");

    let resp = send(&test, Method::POST, "/favorite/planet/1/abc", None).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
