//! Error types for the Holonet server.
//!
//! Each domain error type maps itself to an HTTP status and a JSON [`ErrorDto`] body
//! through `IntoResponse`, and [`Error`] aggregates them together with library errors
//! so handlers can propagate everything with `?`.

pub mod config;
pub mod conflict;
pub mod not_found;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ErrorKind},
    server::error::{
        config::ConfigError, conflict::ConflictError, not_found::NotFoundError,
        validation::ValidationError,
    },
};

/// Main error type for the Holonet server.
///
/// Validation, not found and conflict errors are reported to the client as-is with
/// a 4xx status. Everything else is logged and reported as a generic 500.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Request body or path failed validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// A referenced user, catalogue entry or favorite does not exist.
    #[error(transparent)]
    NotFoundError(#[from] NotFoundError),
    /// A unique value is already taken.
    #[error(transparent)]
    ConflictError(#[from] ConflictError),
    /// Password hashing failed.
    #[error("Failed to hash password: {0}")]
    PasswordHashError(argon2::password_hash::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// A blocking task panicked or was cancelled.
    #[error("Blocking task failed: {0}")]
    TaskJoinError(#[from] tokio::task::JoinError),
    /// Binding or serving the HTTP listener failed.
    #[error("Server I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<argon2::password_hash::Error> for Error {
    fn from(err: argon2::password_hash::Error) -> Self {
        Self::PasswordHashError(err)
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::ValidationError(rejection.into())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Self::ValidationError(rejection.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::NotFoundError(err) => err.into_response(),
            Self::ConflictError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
                kind: ErrorKind::Internal,
            }),
        )
            .into_response()
    }
}
