//! Utility functions shared by the server services.

pub mod password;
