//! Request and response bodies shared by the HTTP API.

pub mod api;
pub mod favorite;
pub mod person;
pub mod planet;
pub mod starship;
pub mod user;
