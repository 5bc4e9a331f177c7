//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with an `AppState` built from the test database, then the
//! response status and JSON body are checked.

mod favorite;
mod person;
mod planet;
mod user;

use holonet_test_utils::prelude::*;

use crate::util::body_json;
