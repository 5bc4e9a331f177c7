//! Server application core modules.
//!
//! This module contains the HTTP API for the Holonet catalogue: routing and controllers,
//! the services applying the catalogue and favorite rules, and the repositories persisting
//! users, planets, people, starships and favorites through SeaORM.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
