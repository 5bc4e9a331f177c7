//! Tests for the people endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holonet::{
    model::person::CreatePersonDto,
    server::controller::person::{create_person, get_people, get_person},
};

use super::*;

fn obi_wan(homeworld: Option<i32>) -> CreatePersonDto {
    CreatePersonDto {
        name: "Obi-Wan Kenobi".to_string(),
        height: 182,
        hair_color: "auburn".to_string(),
        skin_color: "fair".to_string(),
        eye_color: "blue-gray".to_string(),
        birth_year: 57,
        gender: "male".to_string(),
        homeworld,
    }
}

/// Tests that a created person embeds their homeworld.
///
/// Expected: 201 with the full homeworld planet, 200 on get with the same body
#[tokio::test]
async fn creates_person_with_homeworld() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_planet("Stewjon")
        .build()
        .await?;

    let resp = create_person(State(test.to_app_state()), Ok(Json(obi_wan(Some(1)))))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    assert_eq!(created["homeworld"]["name"], "Stewjon");

    let person_id = created["id"].as_i64().unwrap() as i32;
    let resp = get_person(State(test.to_app_state()), Ok(Path(person_id)))
        .await
        .unwrap()
        .into_response();
    assert_eq!(body_json(resp).await, created);

    Ok(())
}

/// Tests that a person without a homeworld renders `homeworld` as null.
///
/// Expected: 201 with `homeworld: null`
#[tokio::test]
async fn creates_person_without_homeworld() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = create_person(State(test.to_app_state()), Ok(Json(obi_wan(None))))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert!(body_json(resp).await["homeworld"].is_null());

    Ok(())
}

/// Tests that an unknown homeworld is rejected.
///
/// Expected: 400 with kind `validation`
#[tokio::test]
async fn rejects_unknown_homeworld() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = create_person(State(test.to_app_state()), Ok(Json(obi_wan(Some(9)))))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["kind"], "validation");

    Ok(())
}

/// Tests listing people.
///
/// Expected: 200 with each person's homeworld resolved
#[tokio::test]
async fn lists_people() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_planet("Tatooine")
        .with_person("Luke Skywalker", Some(1))
        .with_person("Yoda", None)
        .build()
        .await?;

    let resp = get_people(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["people"][0]["homeworld"]["name"], "Tatooine");
    assert!(body["people"][1]["homeworld"].is_null());

    Ok(())
}

/// Tests getting a person that does not exist.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn returns_not_found_for_unknown_person() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = get_person(State(test.to_app_state()), Ok(Path(2)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
