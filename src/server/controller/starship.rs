use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        starship::{CreateStarshipDto, StarshipDto, StarshipsDto},
    },
    server::{error::Error, model::app::AppState, service::starship::StarshipService},
};

pub static STARSHIP_TAG: &str = "starship";

/// Add a starship to the catalogue
#[utoipa::path(
    post,
    path = "/starship",
    tag = STARSHIP_TAG,
    request_body = CreateStarshipDto,
    responses(
        (status = 201, description = "Starship created", body = StarshipDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_starship(
    State(state): State<AppState>,
    body: Result<Json<CreateStarshipDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(starship) = body?;

    let starship = StarshipService::new(&state.db)
        .create_starship(starship)
        .await?;

    Ok((StatusCode::CREATED, Json(starship)))
}

/// List all starships
#[utoipa::path(
    get,
    path = "/starships",
    tag = STARSHIP_TAG,
    responses(
        (status = 200, description = "All starships", body = StarshipsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starships(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let starships = StarshipService::new(&state.db).get_starships().await?;

    Ok((StatusCode::OK, Json(StarshipsDto { starships })))
}

/// Get a single starship by ID
#[utoipa::path(
    get,
    path = "/starship/{starship_id}",
    tag = STARSHIP_TAG,
    params(
        ("starship_id" = i32, Path, description = "ID of the starship")
    ),
    responses(
        (status = 200, description = "The starship", body = StarshipDto),
        (status = 400, description = "Starship ID is not an integer", body = ErrorDto),
        (status = 404, description = "Starship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starship(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(starship_id) = path?;

    let starship = StarshipService::new(&state.db)
        .get_starship(starship_id)
        .await?;

    Ok((StatusCode::OK, Json(starship)))
}
