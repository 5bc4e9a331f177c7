//! Tests for the favorite endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::favorite::TargetKind;
use holonet::{
    model::favorite::FavoriteKindParam,
    server::controller::favorite::{add_favorite, get_user_favorites, remove_favorite},
};

use super::*;

/// Tests that adding the same planet twice keeps a single favorite.
///
/// Expected: 201 then 200, one planet in the user's favorites
#[tokio::test]
async fn add_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_user("luke")
        .with_planet("Tatooine")
        .build()
        .await?;

    let first = add_favorite(
        State(test.to_app_state()),
        Ok(Path((FavoriteKindParam::Planet, 1, 1))),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(body_json(first).await["favorite"]["planet"]["name"], "Tatooine");

    let second = add_favorite(
        State(test.to_app_state()),
        Ok(Path((FavoriteKindParam::Planet, 1, 1))),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(second.status(), StatusCode::OK);

    let resp = get_user_favorites(State(test.to_app_state()), Ok(Path(1)))
        .await
        .unwrap()
        .into_response();
    let favorites = body_json(resp).await["favorites"].clone();
    assert_eq!(favorites.as_array().unwrap().len(), 1);
    assert_eq!(favorites[0]["planet"]["name"], "Tatooine");

    Ok(())
}

/// Tests that the `people` route segment stores a person favorite.
///
/// Expected: 201 with the person rendered under the `person` key
#[tokio::test]
async fn adds_person_through_people_segment() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_user("leia")
        .with_person("Han Solo", None)
        .build()
        .await?;

    let resp = add_favorite(
        State(test.to_app_state()),
        Ok(Path((FavoriteKindParam::People, 1, 1))),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await["favorite"]["person"]["name"], "Han Solo");
    assert_eq!(test.favorite().count(1, TargetKind::Person, 1).await?, 1);

    Ok(())
}

/// Tests adding a favorite for a user that does not exist.
///
/// Expected: 404 Not Found and no favorite row
#[tokio::test]
async fn add_fails_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_starship("X-wing")
        .build()
        .await?;

    let resp = add_favorite(
        State(test.to_app_state()),
        Ok(Path((FavoriteKindParam::Starship, 4, 1))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_json(resp).await["error"]
        .as_str()
        .unwrap()
        .contains("User"));
    assert_eq!(test.favorite().count_all().await?, 0);

    Ok(())
}

/// Tests adding a favorite for a target that does not exist.
///
/// Expected: 404 Not Found naming the starship
#[tokio::test]
async fn add_fails_for_unknown_target() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_user("luke")
        .build()
        .await?;

    let resp = add_favorite(
        State(test.to_app_state()),
        Ok(Path((FavoriteKindParam::Starship, 1, 8))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_json(resp).await["error"]
        .as_str()
        .unwrap()
        .contains("Starship"));

    Ok(())
}

/// Tests removing a favorite and removing it again.
///
/// Expected: 200 then 404, with no favorite row left
#[tokio::test]
async fn remove_then_remove_again() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_user("luke")
        .with_planet("Dagobah")
        .build()
        .await?;
    test.favorite()
        .insert_favorite(1, TargetKind::Planet, 1)
        .await?;

    let resp = remove_favorite(
        State(test.to_app_state()),
        Ok(Path((FavoriteKindParam::Planet, 1, 1))),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_json(resp).await["message"]
        .as_str()
        .unwrap()
        .contains("Dagobah"));
    assert_eq!(test.favorite().count(1, TargetKind::Planet, 1).await?, 0);

    let resp = remove_favorite(
        State(test.to_app_state()),
        Ok(Path((FavoriteKindParam::Planet, 1, 1))),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests listing favorites for a user that does not exist.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn list_fails_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = get_user_favorites(State(test.to_app_state()), Ok(Path(1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
