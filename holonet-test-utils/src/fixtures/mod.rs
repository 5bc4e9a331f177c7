//! Test fixture modules for database record creation.
//!
//! - `catalogue` - planets, people and starships
//! - `favorite` - favorites linking users to catalogue entries
//! - `user` - registered users
//! - `factory` - in-memory models that never touch the database

pub mod catalogue;
pub mod factory;
pub mod favorite;
pub mod user;
