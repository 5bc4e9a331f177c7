//! Service layer.
//!
//! Services hold the business rules on top of the repositories: input checks, password
//! hashing, existence checks for referenced rows and conversion into API DTOs.

pub mod favorite;
pub mod person;
pub mod planet;
pub mod starship;
pub mod user;
