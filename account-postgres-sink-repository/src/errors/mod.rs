//! Error types for the account sink repository.
//! Consolidates and re-exports error types for configuration and cursor storage.
mod cursor_repository;
mod database;

pub use cursor_repository::CursorRepositoryError;
pub use database::DatabaseConfigError;
