//! Configuration module for the account sink.
//! Defines and manages application-wide settings and dependencies.
mod dependencies;

pub use dependencies::{Dependencies, TOKEN_REFRESH_INTERVAL};
