//! Tests for the user endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holonet::{
    model::user::CreateUserDto,
    server::controller::user::{create_user, get_user, get_users},
};

use super::*;

fn luke() -> CreateUserDto {
    CreateUserDto {
        username: "luke".to_string(),
        email: "luke@tatooine.org".to_string(),
        password: "use-the-force".to_string(),
    }
}

/// Tests that a created user can be read back without its password.
///
/// Expected: 201 on create, 200 on get with matching username and email
#[tokio::test]
async fn creates_and_gets_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = create_user(State(test.to_app_state()), Ok(Json(luke())))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    assert!(created.get("password").is_none());

    let user_id = created["id"].as_i64().unwrap() as i32;
    let resp = get_user(State(test.to_app_state()), Ok(Path(user_id)))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["username"], "luke");
    assert_eq!(body["email"], "luke@tatooine.org");
    assert!(body.get("password").is_none());

    Ok(())
}

/// Tests that a user without a password is rejected.
///
/// Expected: 400 with a validation error naming the field
#[tokio::test]
async fn rejects_missing_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let user = CreateUserDto {
        password: String::new(),
        ..luke()
    };
    let resp = create_user(State(test.to_app_state()), Ok(Json(user)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["kind"], "validation");
    assert!(body["error"].as_str().unwrap().contains("password"));

    Ok(())
}

/// Tests that a second user with the same username is rejected.
///
/// Expected: 409 Conflict
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    create_user(State(test.to_app_state()), Ok(Json(luke())))
        .await
        .unwrap();
    let duplicate = CreateUserDto {
        email: "skywalker@tatooine.org".to_string(),
        ..luke()
    };
    let resp = create_user(State(test.to_app_state()), Ok(Json(duplicate)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(resp).await["kind"], "conflict");

    Ok(())
}

/// Tests listing users.
///
/// Expected: 200 with every user in insertion order
#[tokio::test]
async fn lists_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_user("luke")
        .with_user("leia")
        .build()
        .await?;

    let resp = get_users(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let usernames: Vec<&str> = body["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert_eq!(usernames, vec!["luke", "leia"]);

    Ok(())
}

/// Tests listing users when none are registered.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn returns_not_found_without_users() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = get_users(State(test.to_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests getting a user that does not exist.
///
/// Expected: 404 Not Found with kind `not_found`
#[tokio::test]
async fn returns_not_found_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = get_user(State(test.to_app_state()), Ok(Path(7)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["kind"], "not_found");

    Ok(())
}
