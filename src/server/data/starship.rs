use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::starship::CreateStarshipDto;

pub struct StarshipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StarshipRepository<'a, C> {
    /// Creates a new instance of [`StarshipRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        starship: CreateStarshipDto,
    ) -> Result<entity::starship::Model, DbErr> {
        let starship = entity::starship::ActiveModel {
            name: ActiveValue::Set(starship.name),
            model: ActiveValue::Set(starship.model),
            starship_class: ActiveValue::Set(starship.starship_class),
            manufacturer: ActiveValue::Set(starship.manufacturer),
            cost_in_credits: ActiveValue::Set(starship.cost_in_credits),
            length: ActiveValue::Set(starship.length),
            consumables: ActiveValue::Set(starship.consumables),
            passengers: ActiveValue::Set(starship.passengers),
            ..Default::default()
        };

        starship.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        starship_id: i32,
    ) -> Result<Option<entity::starship::Model>, DbErr> {
        entity::prelude::Starship::find_by_id(starship_id)
            .one(self.db)
            .await
    }

    /// Starships matching any of `starship_ids`, IDs without a row are skipped
    pub async fn get_by_ids(
        &self,
        starship_ids: &[i32],
    ) -> Result<Vec<entity::starship::Model>, DbErr> {
        if starship_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Starship::find()
            .filter(entity::starship::Column::Id.is_in(starship_ids.iter().copied()))
            .order_by_asc(entity::starship::Column::Id)
            .all(self.db)
            .await
    }

    /// All starships in insertion order
    pub async fn get_all(&self) -> Result<Vec<entity::starship::Model>, DbErr> {
        entity::prelude::Starship::find()
            .order_by_asc(entity::starship::Column::Id)
            .all(self.db)
            .await
    }
}
