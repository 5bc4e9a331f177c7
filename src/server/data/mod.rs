//! Data access layer repositories.
//!
//! One repository per table. Repositories are generic over [`sea_orm::ConnectionTrait`]
//! so the same queries run on a plain connection or inside a transaction.

pub mod favorite;
pub mod person;
pub mod planet;
pub mod starship;
pub mod user;
