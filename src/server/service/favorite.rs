use std::collections::HashMap;

use entity::favorite::TargetKind;
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::{
        favorite::FavoriteDto, person::PersonDto, planet::PlanetDto, starship::StarshipDto,
    },
    server::{
        data::{
            favorite::FavoriteRepository, person::PersonRepository, planet::PlanetRepository,
            starship::StarshipRepository, user::UserRepository,
        },
        error::{not_found::NotFoundError, Error},
        model::db::{FavoriteModel, UserModel},
    },
};

/// Result of adding a favorite, both variants are successes.
#[derive(Debug, Clone, PartialEq)]
pub enum AddFavoriteOutcome {
    /// A new favorite row was inserted
    Created(FavoriteDto),
    /// The user already had this favorite, nothing was inserted
    AlreadyExists(FavoriteDto),
}

/// Service applying the rules for a user's favorite planets, people and starships.
///
/// Every operation first resolves the user and then the target, so a missing user is
/// reported before a missing target.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a catalogue entry to a user's favorites.
    ///
    /// Adding an existing favorite is idempotent. The existence check and the unique index on
    /// `(user_id, kind, target_id)` together ensure concurrent adds never produce two rows, the
    /// request losing the race reports [`AddFavoriteOutcome::AlreadyExists`].
    ///
    /// # Returns
    /// - `Ok(AddFavoriteOutcome)` - Favorite created or already present
    /// - `Err(Error::NotFoundError)` - User or target does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add(
        &self,
        user_id: i32,
        kind: TargetKind,
        target_id: i32,
    ) -> Result<AddFavoriteOutcome, Error> {
        self.resolve_user(user_id).await?;
        let target = self.resolve_target(kind, target_id).await?;

        let favorite_repo = FavoriteRepository::new(self.db);
        if favorite_repo.find(user_id, kind, target_id).await?.is_some() {
            return Ok(AddFavoriteOutcome::AlreadyExists(target));
        }

        self.insert(user_id, target, target_id).await
    }

    /// Inserts the favorite, reporting a unique index violation from a concurrent insert
    /// as [`AddFavoriteOutcome::AlreadyExists`]
    async fn insert(
        &self,
        user_id: i32,
        target: FavoriteDto,
        target_id: i32,
    ) -> Result<AddFavoriteOutcome, Error> {
        let kind = target.kind();

        match FavoriteRepository::new(self.db)
            .create(user_id, kind, target_id)
            .await
        {
            Ok(favorite) => {
                tracing::debug!(
                    favorite_id = favorite.id,
                    user_id,
                    "Added {} ID {} to favorites",
                    kind,
                    target_id
                );

                Ok(AddFavoriteOutcome::Created(target))
            }
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    tracing::debug!(
                        user_id,
                        "Concurrent add of {} ID {} already stored the favorite",
                        kind,
                        target_id
                    );

                    Ok(AddFavoriteOutcome::AlreadyExists(target))
                }
                _ => Err(err.into()),
            },
        }
    }

    /// Removes a catalogue entry from a user's favorites.
    ///
    /// Only the favorite row is deleted, never the catalogue entry itself.
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)` - The entry that was removed
    /// - `Err(Error::NotFoundError)` - User, target or favorite does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove(
        &self,
        user_id: i32,
        kind: TargetKind,
        target_id: i32,
    ) -> Result<FavoriteDto, Error> {
        self.resolve_user(user_id).await?;
        let target = self.resolve_target(kind, target_id).await?;

        let favorite_repo = FavoriteRepository::new(self.db);
        let Some(favorite) = favorite_repo.find(user_id, kind, target_id).await? else {
            return Err(NotFoundError::Favorite {
                user_id,
                kind,
                target_id,
            }
            .into());
        };

        favorite_repo.delete(favorite.id).await?;

        Ok(target)
    }

    /// Lists a user's favorites oldest first, each rendered as its full catalogue entry.
    ///
    /// Favorites whose catalogue entry no longer exists are skipped.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        self.resolve_user(user_id).await?;

        let favorites = FavoriteRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        let mut targets = self.load_targets(&favorites).await?;

        let mut dtos = Vec::with_capacity(favorites.len());
        for favorite in favorites {
            match targets.remove(&(favorite.kind, favorite.target_id)) {
                Some(target) => dtos.push(target),
                None => tracing::warn!(
                    favorite_id = favorite.id,
                    user_id,
                    "Favorite {} ID {} no longer exists, skipping",
                    favorite.kind,
                    favorite.target_id
                ),
            }
        }

        Ok(dtos)
    }

    async fn resolve_user(&self, user_id: i32) -> Result<UserModel, Error> {
        UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| NotFoundError::User(user_id).into())
    }

    async fn resolve_target(&self, kind: TargetKind, target_id: i32) -> Result<FavoriteDto, Error> {
        let target = match kind {
            TargetKind::Planet => PlanetRepository::new(self.db)
                .get_by_id(target_id)
                .await?
                .map(|planet| FavoriteDto::Planet(planet.into())),
            TargetKind::Person => PersonRepository::new(self.db)
                .get_with_homeworld(target_id)
                .await?
                .map(|(person, homeworld)| {
                    FavoriteDto::Person(PersonDto::from_model(person, homeworld))
                }),
            TargetKind::Starship => StarshipRepository::new(self.db)
                .get_by_id(target_id)
                .await?
                .map(|starship| FavoriteDto::Starship(starship.into())),
        };

        target.ok_or_else(|| NotFoundError::target(kind, target_id).into())
    }

    /// Load every favorited entry with one query per kind, keyed by `(kind, target_id)`
    async fn load_targets(
        &self,
        favorites: &[FavoriteModel],
    ) -> Result<HashMap<(TargetKind, i32), FavoriteDto>, Error> {
        let ids_of = |kind: TargetKind| -> Vec<i32> {
            favorites
                .iter()
                .filter(|f| f.kind == kind)
                .map(|f| f.target_id)
                .collect()
        };

        let mut targets = HashMap::new();

        for planet in PlanetRepository::new(self.db)
            .get_by_ids(&ids_of(TargetKind::Planet))
            .await?
        {
            targets.insert(
                (TargetKind::Planet, planet.id),
                FavoriteDto::Planet(PlanetDto::from(planet)),
            );
        }

        for (person, homeworld) in PersonRepository::new(self.db)
            .get_by_ids_with_homeworld(&ids_of(TargetKind::Person))
            .await?
        {
            targets.insert(
                (TargetKind::Person, person.id),
                FavoriteDto::Person(PersonDto::from_model(person, homeworld)),
            );
        }

        for starship in StarshipRepository::new(self.db)
            .get_by_ids(&ids_of(TargetKind::Starship))
            .await?
        {
            targets.insert(
                (TargetKind::Starship, starship.id),
                FavoriteDto::Starship(StarshipDto::from(starship)),
            );
        }

        Ok(targets)
    }
}
