//! SeaORM entities for the Holonet catalogue database.

pub mod prelude;

pub mod favorite;
pub mod person;
pub mod planet;
pub mod starship;
pub mod user;
