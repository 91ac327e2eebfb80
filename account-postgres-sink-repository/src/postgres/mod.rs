//! PostgreSQL implementations: connection pool, token rotation, migrations and
//! the cursor repository.
mod cursor_repository;
mod pool;

pub use cursor_repository::PostgresCursorRepository;
pub use pool::{connect, refresh_auth_token, run_migrations, spawn_token_refresh};
