//! Holonet, a JSON API for a Star Wars catalogue of planets, people and starships with
//! per-user favorites.

pub mod model;
pub mod server;
