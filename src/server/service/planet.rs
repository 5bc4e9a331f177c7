use sea_orm::DatabaseConnection;

use crate::{
    model::planet::{CreatePlanetDto, PlanetDto},
    server::{data::planet::PlanetRepository, error::not_found::NotFoundError, error::Error},
};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_planet(&self, planet: CreatePlanetDto) -> Result<PlanetDto, Error> {
        let planet = PlanetRepository::new(self.db).create(planet).await?;

        tracing::info!(planet_id = planet.id, "Added planet {}", planet.name);

        Ok(planet.into())
    }

    pub async fn get_planet(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        match PlanetRepository::new(self.db).get_by_id(planet_id).await? {
            Some(planet) => Ok(planet.into()),
            None => Err(NotFoundError::Planet(planet_id).into()),
        }
    }

    pub async fn get_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }
}
