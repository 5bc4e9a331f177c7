use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn catalogue<'a>(&'a self) -> CatalogueFixtures<'a> {
        CatalogueFixtures { setup: self }
    }
}

pub struct CatalogueFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogueFixtures<'a> {
    /// Insert a planet with the factory's standard values
    pub async fn insert_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        let planet = factory::mock_planet_model(0, name);

        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(planet.name),
                diameter: ActiveValue::Set(planet.diameter),
                rotation_period: ActiveValue::Set(planet.rotation_period),
                orbital_period: ActiveValue::Set(planet.orbital_period),
                gravity: ActiveValue::Set(planet.gravity),
                population: ActiveValue::Set(planet.population),
                climate: ActiveValue::Set(planet.climate),
                terrain: ActiveValue::Set(planet.terrain),
                surface_water: ActiveValue::Set(planet.surface_water),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a person with the factory's standard values
    pub async fn insert_person(
        &self,
        name: &str,
        homeworld_id: Option<i32>,
    ) -> Result<entity::person::Model, TestError> {
        let person = factory::mock_person_model(0, name, homeworld_id);

        Ok(
            entity::prelude::Person::insert(entity::person::ActiveModel {
                name: ActiveValue::Set(person.name),
                height: ActiveValue::Set(person.height),
                hair_color: ActiveValue::Set(person.hair_color),
                skin_color: ActiveValue::Set(person.skin_color),
                eye_color: ActiveValue::Set(person.eye_color),
                birth_year: ActiveValue::Set(person.birth_year),
                gender: ActiveValue::Set(person.gender),
                homeworld_id: ActiveValue::Set(person.homeworld_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a starship with the factory's standard values
    pub async fn insert_starship(&self, name: &str) -> Result<entity::starship::Model, TestError> {
        let starship = factory::mock_starship_model(0, name);

        Ok(
            entity::prelude::Starship::insert(entity::starship::ActiveModel {
                name: ActiveValue::Set(starship.name),
                model: ActiveValue::Set(starship.model),
                starship_class: ActiveValue::Set(starship.starship_class),
                manufacturer: ActiveValue::Set(starship.manufacturer),
                cost_in_credits: ActiveValue::Set(starship.cost_in_credits),
                length: ActiveValue::Set(starship.length),
                consumables: ActiveValue::Set(starship.consumables),
                passengers: ActiveValue::Set(starship.passengers),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
