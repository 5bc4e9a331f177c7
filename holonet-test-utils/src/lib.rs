//! Shared test setup for the Holonet workspace.
//!
//! Tests describe their environment with a [`TestBuilder`], which produces a
//! [`TestContext`] backed by an in-memory SQLite database. The context exposes
//! fixture helpers for inserting users, catalogue entries and favorites.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
