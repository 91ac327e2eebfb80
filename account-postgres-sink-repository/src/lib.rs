//! # Account Postgres Sink Repository
//! This crate provides the PostgreSQL side of the account sink: connection
//! configuration with IAM token authentication for RDS hosts, and the cursor
//! table the sink resumes from. It includes definitions for errors, interfaces,
//! and concrete implementations for PostgreSQL and for memory.
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod memory;
pub mod postgres;
pub mod rds;

pub use config::{DatabaseConfig, PasswordSource};
pub use errors::{CursorRepositoryError, DatabaseConfigError};
pub use interfaces::{AuthTokenSigner, Cursor, CursorRepository};
pub use memory::InMemoryCursorRepository;
pub use postgres::{connect, refresh_auth_token, run_migrations, spawn_token_refresh, PostgresCursorRepository};
pub use rds::{MockTokenSigner, RdsAuthTokenSigner};
