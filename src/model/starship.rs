use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StarshipDto {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub starship_class: String,
    pub manufacturer: String,
    pub cost_in_credits: i64,
    pub length: i32,
    pub consumables: String,
    pub passengers: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StarshipsDto {
    pub starships: Vec<StarshipDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateStarshipDto {
    pub name: String,
    pub model: String,
    pub starship_class: String,
    // Older clients send the misspelled key
    #[serde(alias = "manufacter")]
    pub manufacturer: String,
    pub cost_in_credits: i64,
    pub length: i32,
    pub consumables: String,
    pub passengers: i32,
}

impl From<entity::starship::Model> for StarshipDto {
    fn from(starship: entity::starship::Model) -> Self {
        Self {
            id: starship.id,
            name: starship.name,
            model: starship.model,
            starship_class: starship.starship_class,
            manufacturer: starship.manufacturer,
            cost_in_credits: starship.cost_in_credits,
            length: starship.length,
            consumables: starship.consumables,
            passengers: starship.passengers,
        }
    }
}
