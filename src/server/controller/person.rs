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
        person::{CreatePersonDto, PeopleDto, PersonDto},
    },
    server::{error::Error, model::app::AppState, service::person::PersonService},
};

pub static PEOPLE_TAG: &str = "people";

/// Add a person to the catalogue
///
/// When `homeworld` is given it must be the ID of an existing planet.
#[utoipa::path(
    post,
    path = "/people",
    tag = PEOPLE_TAG,
    request_body = CreatePersonDto,
    responses(
        (status = 201, description = "Person created", body = PersonDto),
        (status = 400, description = "Missing or invalid field, or unknown homeworld", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    body: Result<Json<CreatePersonDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(person) = body?;

    let person = PersonService::new(&state.db).create_person(person).await?;

    Ok((StatusCode::CREATED, Json(person)))
}

/// List all people with their homeworlds
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "All people", body = PeopleDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let people = PersonService::new(&state.db).get_people().await?;

    Ok((StatusCode::OK, Json(PeopleDto { people })))
}

/// Get a single person by ID
#[utoipa::path(
    get,
    path = "/people/{people_id}",
    tag = PEOPLE_TAG,
    params(
        ("people_id" = i32, Path, description = "ID of the person")
    ),
    responses(
        (status = 200, description = "The person", body = PersonDto),
        (status = 400, description = "Person ID is not an integer", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(person_id) = path?;

    let person = PersonService::new(&state.db).get_person(person_id).await?;

    Ok((StatusCode::OK, Json(person)))
}
