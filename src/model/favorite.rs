use entity::favorite::TargetKind;
use serde::{Deserialize, Serialize};

use crate::model::{person::PersonDto, planet::PlanetDto, starship::StarshipDto};

/// A favorite rendered as the single catalogue entry it points to, e.g.
/// `{"planet": {...}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteDto {
    Planet(PlanetDto),
    Person(PersonDto),
    Starship(StarshipDto),
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoritesDto {
    pub favorites: Vec<FavoriteDto>,
}

impl FavoriteDto {
    pub fn kind(&self) -> TargetKind {
        match self {
            Self::Planet(_) => TargetKind::Planet,
            Self::Person(_) => TargetKind::Person,
            Self::Starship(_) => TargetKind::Starship,
        }
    }

    /// Name of the favorited catalogue entry
    pub fn name(&self) -> &str {
        match self {
            Self::Planet(planet) => &planet.name,
            Self::Person(person) => &person.name,
            Self::Starship(starship) => &starship.name,
        }
    }
}

/// Response for adding a favorite, returned both when it was created and
/// when it already existed.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteStatusDto {
    pub message: String,
    pub favorite: FavoriteDto,
}

/// The `{kind}` segment of the favorite routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum FavoriteKindParam {
    #[serde(rename = "planet")]
    Planet,
    #[serde(rename = "people")]
    People,
    #[serde(rename = "starship")]
    Starship,
}

impl From<FavoriteKindParam> for TargetKind {
    fn from(kind: FavoriteKindParam) -> Self {
        match kind {
            FavoriteKindParam::Planet => TargetKind::Planet,
            FavoriteKindParam::People => TargetKind::Person,
            FavoriteKindParam::Starship => TargetKind::Starship,
        }
    }
}
