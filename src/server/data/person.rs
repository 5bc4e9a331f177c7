use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::person::CreatePersonDto;

pub struct PersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PersonRepository<'a, C> {
    /// Creates a new instance of [`PersonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new person
    ///
    /// The homeworld is not checked here, an unknown planet ID fails on the foreign key.
    pub async fn create(&self, person: CreatePersonDto) -> Result<entity::person::Model, DbErr> {
        let person = entity::person::ActiveModel {
            name: ActiveValue::Set(person.name),
            height: ActiveValue::Set(person.height),
            hair_color: ActiveValue::Set(person.hair_color),
            skin_color: ActiveValue::Set(person.skin_color),
            eye_color: ActiveValue::Set(person.eye_color),
            birth_year: ActiveValue::Set(person.birth_year),
            gender: ActiveValue::Set(person.gender),
            homeworld_id: ActiveValue::Set(person.homeworld),
            ..Default::default()
        };

        person.insert(self.db).await
    }

    /// Person together with their homeworld, `None` when the person has no homeworld
    /// or the planet row is missing
    pub async fn get_with_homeworld(
        &self,
        person_id: i32,
    ) -> Result<Option<(entity::person::Model, Option<entity::planet::Model>)>, DbErr> {
        entity::prelude::Person::find_by_id(person_id)
            .find_also_related(entity::prelude::Planet)
            .one(self.db)
            .await
    }

    /// People matching any of `person_ids` together with their homeworlds
    pub async fn get_by_ids_with_homeworld(
        &self,
        person_ids: &[i32],
    ) -> Result<Vec<(entity::person::Model, Option<entity::planet::Model>)>, DbErr> {
        if person_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Person::find()
            .filter(entity::person::Column::Id.is_in(person_ids.iter().copied()))
            .find_also_related(entity::prelude::Planet)
            .order_by_asc(entity::person::Column::Id)
            .all(self.db)
            .await
    }

    /// All people with their homeworlds in insertion order
    pub async fn get_all_with_homeworld(
        &self,
    ) -> Result<Vec<(entity::person::Model, Option<entity::planet::Model>)>, DbErr> {
        entity::prelude::Person::find()
            .find_also_related(entity::prelude::Planet)
            .order_by_asc(entity::person::Column::Id)
            .all(self.db)
            .await
    }
}
