use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{FavoriteKindParam, FavoriteStatusDto, FavoritesDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::favorite::{AddFavoriteOutcome, FavoriteService},
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// List a user's favorites
///
/// Each favorite is rendered as a single key naming its kind, e.g. `{"planet": {...}}`.
#[utoipa::path(
    get,
    path = "/user/{user_id}/favorites",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user")
    ),
    responses(
        (status = 200, description = "The user's favorites, oldest first", body = FavoritesDto),
        (status = 400, description = "User ID is not an integer", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(user_id) = path?;

    let favorites = FavoriteService::new(&state.db)
        .list_for_user(user_id)
        .await?;

    Ok((StatusCode::OK, Json(FavoritesDto { favorites })))
}

/// Add a planet, person or starship to a user's favorites
///
/// Adding an entry that is already a favorite succeeds with 200 and leaves a single favorite.
#[utoipa::path(
    post,
    path = "/favorite/{kind}/{user_id}/{target_id}",
    tag = FAVORITE_TAG,
    params(
        ("kind" = FavoriteKindParam, Path, description = "Kind of catalogue entry: planet, people or starship"),
        ("user_id" = i32, Path, description = "ID of the user"),
        ("target_id" = i32, Path, description = "ID of the planet, person or starship")
    ),
    responses(
        (status = 201, description = "Favorite added", body = FavoriteStatusDto),
        (status = 200, description = "Entry was already a favorite", body = FavoriteStatusDto),
        (status = 400, description = "Unknown kind or non-integer ID", body = ErrorDto),
        (status = 404, description = "User or catalogue entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    path: Result<Path<(FavoriteKindParam, i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path((kind, user_id, target_id)) = path?;

    let outcome = FavoriteService::new(&state.db)
        .add(user_id, kind.into(), target_id)
        .await?;

    let (status, message, favorite) = match outcome {
        AddFavoriteOutcome::Created(favorite) => (
            StatusCode::CREATED,
            format!(
                "Added {} {} to the favorites of user ID {}",
                favorite.kind(),
                favorite.name(),
                user_id
            ),
            favorite,
        ),
        AddFavoriteOutcome::AlreadyExists(favorite) => (
            StatusCode::OK,
            format!(
                "{} {} is already a favorite of user ID {}",
                favorite.kind(),
                favorite.name(),
                user_id
            ),
            favorite,
        ),
    };

    Ok((status, Json(FavoriteStatusDto { message, favorite })))
}

/// Remove a planet, person or starship from a user's favorites
///
/// Only the favorite is removed, the catalogue entry itself is kept.
#[utoipa::path(
    delete,
    path = "/favorite/{kind}/{user_id}/{target_id}",
    tag = FAVORITE_TAG,
    params(
        ("kind" = FavoriteKindParam, Path, description = "Kind of catalogue entry: planet, people or starship"),
        ("user_id" = i32, Path, description = "ID of the user"),
        ("target_id" = i32, Path, description = "ID of the planet, person or starship")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 400, description = "Unknown kind or non-integer ID", body = ErrorDto),
        (status = 404, description = "User, catalogue entry or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    path: Result<Path<(FavoriteKindParam, i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path((kind, user_id, target_id)) = path?;

    let favorite = FavoriteService::new(&state.db)
        .remove(user_id, kind.into(), target_id)
        .await?;

    let message = format!(
        "Removed {} {} from the favorites of user ID {}",
        favorite.kind(),
        favorite.name(),
        user_id
    );

    Ok((StatusCode::OK, Json(MessageDto { message })))
}
