//! In-memory implementations for tests and local development.
mod cursor_repository;

pub use cursor_repository::InMemoryCursorRepository;
