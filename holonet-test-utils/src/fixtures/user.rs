use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user whose email is `<username>@holonet.test`
    pub async fn insert_user(&self, username: &str) -> Result<entity::user::Model, TestError> {
        let user = factory::mock_user_model(0, username);

        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                username: ActiveValue::Set(user.username),
                email: ActiveValue::Set(user.email),
                password: ActiveValue::Set(user.password),
                created_at: ActiveValue::Set(user.created_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
