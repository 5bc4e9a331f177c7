use sea_orm::DatabaseConnection;

use crate::{
    model::person::{CreatePersonDto, PersonDto},
    server::{
        data::{person::PersonRepository, planet::PlanetRepository},
        error::{not_found::NotFoundError, validation::ValidationError, Error},
    },
};

pub struct PersonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a person, the homeworld must be an existing planet when given.
    ///
    /// # Returns
    /// - `Ok(PersonDto)` - The created person with their homeworld embedded
    /// - `Err(Error::ValidationError)` - Homeworld planet does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_person(&self, person: CreatePersonDto) -> Result<PersonDto, Error> {
        let homeworld = match person.homeworld {
            Some(planet_id) => match PlanetRepository::new(self.db).get_by_id(planet_id).await? {
                Some(planet) => Some(planet),
                None => return Err(ValidationError::UnknownHomeworld(planet_id).into()),
            },
            None => None,
        };

        let person = PersonRepository::new(self.db).create(person).await?;

        tracing::info!(person_id = person.id, "Added person {}", person.name);

        Ok(PersonDto::from_model(person, homeworld))
    }

    pub async fn get_person(&self, person_id: i32) -> Result<PersonDto, Error> {
        match PersonRepository::new(self.db)
            .get_with_homeworld(person_id)
            .await?
        {
            Some((person, homeworld)) => Ok(PersonDto::from_model(person, homeworld)),
            None => Err(NotFoundError::Person(person_id).into()),
        }
    }

    pub async fn get_people(&self) -> Result<Vec<PersonDto>, Error> {
        let people = PersonRepository::new(self.db)
            .get_all_with_homeworld()
            .await?;

        Ok(people
            .into_iter()
            .map(|(person, homeworld)| PersonDto::from_model(person, homeworld))
            .collect())
    }
}
