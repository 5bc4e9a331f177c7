use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::favorite::TargetKind;
use thiserror::Error;

use crate::model::api::{ErrorDto, ErrorKind};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("User ID {0} does not exist")]
    User(i32),
    #[error("No users exist")]
    NoUsers,
    #[error("Planet ID {0} does not exist")]
    Planet(i32),
    #[error("Person ID {0} does not exist")]
    Person(i32),
    #[error("Starship ID {0} does not exist")]
    Starship(i32),
    #[error("{kind} ID {target_id} is not a favorite of user ID {user_id}")]
    Favorite {
        user_id: i32,
        kind: TargetKind,
        target_id: i32,
    },
}

impl NotFoundError {
    /// Not found error for the catalogue entry a favorite points to
    pub fn target(kind: TargetKind, target_id: i32) -> Self {
        match kind {
            TargetKind::Planet => Self::Planet(target_id),
            TargetKind::Person => Self::Person(target_id),
            TargetKind::Starship => Self::Starship(target_id),
        }
    }

    /// Name of the missing resource
    pub fn resource(&self) -> &'static str {
        match self {
            Self::User(_) | Self::NoUsers => "user",
            Self::Planet(_) => "planet",
            Self::Person(_) => "person",
            Self::Starship(_) => "starship",
            Self::Favorite { .. } => "favorite",
        }
    }
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        tracing::debug!(resource = self.resource(), "{}", self);

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: self.to_string(),
                kind: ErrorKind::NotFound,
            }),
        )
            .into_response()
    }
}
