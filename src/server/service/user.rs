use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{
            conflict::ConflictError, not_found::NotFoundError, validation::ValidationError, Error,
        },
        util::password::hash_password_blocking,
    },
};

/// Service for registering and looking up users.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// Username and email are trimmed, the password is hashed with argon2 before storage.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user, without password
    /// - `Err(Error::ValidationError)` - A required field is missing or blank
    /// - `Err(Error::ConflictError)` - Username or email already registered
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(&self, user: CreateUserDto) -> Result<UserDto, Error> {
        let username = user.username.trim();
        let email = user.email.trim();

        if username.is_empty() {
            return Err(ValidationError::MissingField("username").into());
        }
        if email.is_empty() {
            return Err(ValidationError::MissingField("email").into());
        }
        if user.password.is_empty() {
            return Err(ValidationError::MissingField("password").into());
        }

        let password_hash = hash_password_blocking(user.password).await?;

        let user_repo = UserRepository::new(self.db);
        match user_repo
            .create(username.to_string(), email.to_string(), password_hash)
            .await
        {
            Ok(user) => {
                tracing::info!(user_id = user.id, "Registered user {}", user.username);

                Ok(user.into())
            }
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(ConflictError::UserExists.into()),
                _ => Err(err.into()),
            },
        }
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User found
    /// - `Err(Error::NotFoundError)` - No user with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        match user_repo.get_by_id(user_id).await? {
            Some(user) => Ok(user.into()),
            None => Err(NotFoundError::User(user_id).into()),
        }
    }

    /// Retrieves every user in registration order.
    ///
    /// An empty user table is reported as [`NotFoundError::NoUsers`].
    pub async fn get_users(&self) -> Result<Vec<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        let users = user_repo.get_all().await?;
        if users.is_empty() {
            return Err(NotFoundError::NoUsers.into());
        }

        Ok(users.into_iter().map(UserDto::from).collect())
    }
}
