use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDto, ErrorKind};

#[derive(Error, Debug)]
pub enum ConflictError {
    #[error("Username or email is already registered")]
    UserExists,
}

impl IntoResponse for ConflictError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::CONFLICT,
            Json(ErrorDto {
                error: self.to_string(),
                kind: ErrorKind::Conflict,
            }),
        )
            .into_response()
    }
}
