use serde::{Deserialize, Serialize};

use crate::model::planet::PlanetDto;

/// A person with their homeworld resolved.
///
/// `homeworld` is `None` both for people without a homeworld and for people
/// whose homeworld planet could not be loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PersonDto {
    pub id: i32,
    pub name: String,
    pub height: i32,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: i32,
    pub gender: String,
    pub homeworld: Option<PlanetDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PeopleDto {
    pub people: Vec<PersonDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatePersonDto {
    pub name: String,
    pub height: i32,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: i32,
    pub gender: String,
    /// ID of an existing planet
    #[serde(default)]
    pub homeworld: Option<i32>,
}

impl PersonDto {
    /// Build the DTO from a person and their loaded homeworld.
    ///
    /// A homeworld ID without a loaded planet renders as `None`.
    pub fn from_model(
        person: entity::person::Model,
        homeworld: Option<entity::planet::Model>,
    ) -> Self {
        if let (Some(homeworld_id), None) = (person.homeworld_id, homeworld.as_ref()) {
            tracing::warn!(
                person_id = person.id,
                homeworld_id,
                "Homeworld planet of person is missing, rendering without homeworld"
            );
        }

        Self {
            id: person.id,
            name: person.name,
            height: person.height,
            hair_color: person.hair_color,
            skin_color: person.skin_color,
            eye_color: person.eye_color,
            birth_year: person.birth_year,
            gender: person.gender,
            homeworld: homeworld.map(PlanetDto::from),
        }
    }
}
