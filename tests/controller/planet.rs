//! Tests for the planet endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holonet::{
    model::planet::CreatePlanetDto,
    server::controller::planet::{create_planet, get_planet, get_planets},
};

use super::*;

/// Tests that every field of a created planet is returned unchanged by get.
///
/// Expected: 201 on create, 200 on get with identical fields
#[tokio::test]
async fn creates_and_gets_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let planet = CreatePlanetDto {
        name: "Coruscant".to_string(),
        diameter: 12240,
        rotation_period: 24,
        orbital_period: 368,
        gravity: 1,
        population: 1_000_000_000_000,
        climate: "temperate".to_string(),
        terrain: "cityscape".to_string(),
        surface_water: 0,
    };
    let resp = create_planet(State(test.to_app_state()), Ok(Json(planet)))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;

    let planet_id = created["id"].as_i64().unwrap() as i32;
    let resp = get_planet(State(test.to_app_state()), Ok(Path(planet_id)))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let fetched = body_json(resp).await;
    assert_eq!(fetched, created);
    assert_eq!(fetched["population"], 1_000_000_000_000i64);

    Ok(())
}

/// Tests listing planets.
///
/// Expected: 200 with an empty list when there are none, then every planet in order
#[tokio::test]
async fn lists_planets() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = get_planets(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["planets"], serde_json::json!([]));

    test.catalogue().insert_planet("Tatooine").await?;
    test.catalogue().insert_planet("Hoth").await?;

    let resp = get_planets(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();
    let body = body_json(resp).await;
    assert_eq!(body["planets"][0]["name"], "Tatooine");
    assert_eq!(body["planets"][1]["name"], "Hoth");

    Ok(())
}

/// Tests getting a planet that does not exist.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn returns_not_found_for_unknown_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = get_planet(State(test.to_app_state()), Ok(Path(5)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
