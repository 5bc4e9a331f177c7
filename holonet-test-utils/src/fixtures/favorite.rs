use entity::favorite::TargetKind;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn favorite<'a>(&'a self) -> FavoriteFixtures<'a> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    /// Insert a favorite row directly, bypassing existence checks on the target
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        kind: TargetKind,
        target_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                kind: ActiveValue::Set(kind),
                target_id: ActiveValue::Set(target_id),
                created_at: ActiveValue::Set(factory::mock_timestamp()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Count favorite rows for a user and target
    pub async fn count(
        &self,
        user_id: i32,
        kind: TargetKind,
        target_id: i32,
    ) -> Result<u64, TestError> {
        Ok(entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::Kind.eq(kind))
            .filter(entity::favorite::Column::TargetId.eq(target_id))
            .count(&self.setup.db)
            .await?)
    }

    /// Count all favorite rows
    pub async fn count_all(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::Favorite::find()
            .count(&self.setup.db)
            .await?)
    }
}
