//! Factory functions for generating mock database models.
//!
//! Pure functions returning models with standard test values. They don't require
//! database interaction, suitable for unit tests of conversions.

use chrono::{NaiveDate, NaiveDateTime};

/// Fixed timestamp so factory models compare equal across calls
pub fn mock_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap_or_default()
}

pub fn mock_user_model(id: i32, username: &str) -> entity::user::Model {
    entity::user::Model {
        id,
        username: username.to_string(),
        email: format!("{username}@holonet.test"),
        password: "$argon2id$v=19$m=19456,t=2,p=1$mock$mock".to_string(),
        created_at: mock_timestamp(),
    }
}

pub fn mock_planet_model(id: i32, name: &str) -> entity::planet::Model {
    entity::planet::Model {
        id,
        name: name.to_string(),
        diameter: 10465,
        rotation_period: 23,
        orbital_period: 304,
        gravity: 1,
        population: 200000,
        climate: "arid".to_string(),
        terrain: "desert".to_string(),
        surface_water: 1,
    }
}

pub fn mock_person_model(id: i32, name: &str, homeworld_id: Option<i32>) -> entity::person::Model {
    entity::person::Model {
        id,
        name: name.to_string(),
        height: 172,
        hair_color: "blond".to_string(),
        skin_color: "fair".to_string(),
        eye_color: "blue".to_string(),
        birth_year: 19,
        gender: "male".to_string(),
        homeworld_id,
    }
}

pub fn mock_starship_model(id: i32, name: &str) -> entity::starship::Model {
    entity::starship::Model {
        id,
        name: name.to_string(),
        model: "YT-1300 light freighter".to_string(),
        starship_class: "Light freighter".to_string(),
        manufacturer: "Corellian Engineering Corporation".to_string(),
        cost_in_credits: 100000,
        length: 34,
        consumables: "2 months".to_string(),
        passengers: 6,
    }
}
