//! Connection settings for the sink database.
mod database;

pub use database::{DatabaseConfig, PasswordSource, RDS_HOST_PATTERN};
