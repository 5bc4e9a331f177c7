use sea_orm::DatabaseConnection;

use crate::{
    model::starship::{CreateStarshipDto, StarshipDto},
    server::{data::starship::StarshipRepository, error::not_found::NotFoundError, error::Error},
};

pub struct StarshipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StarshipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_starship(&self, starship: CreateStarshipDto) -> Result<StarshipDto, Error> {
        let starship = StarshipRepository::new(self.db).create(starship).await?;

        tracing::info!(starship_id = starship.id, "Added starship {}", starship.name);

        Ok(starship.into())
    }

    pub async fn get_starship(&self, starship_id: i32) -> Result<StarshipDto, Error> {
        match StarshipRepository::new(self.db).get_by_id(starship_id).await? {
            Some(starship) => Ok(starship.into()),
            None => Err(NotFoundError::Starship(starship_id).into()),
        }
    }

    pub async fn get_starships(&self) -> Result<Vec<StarshipDto>, Error> {
        let starships = StarshipRepository::new(self.db).get_all().await?;

        Ok(starships.into_iter().map(StarshipDto::from).collect())
    }
}
