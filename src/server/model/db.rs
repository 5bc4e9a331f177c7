//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate used throughout the server.

/// Registered user, `password` holds the argon2 hash
pub type UserModel = entity::user::Model;

/// A user's favorite, pointing at a planet, person or starship by `kind` and `target_id`
pub type FavoriteModel = entity::favorite::Model;
