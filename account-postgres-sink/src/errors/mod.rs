//! Error types for the account sink application.
//! Consolidates errors from configuration, the connection pool and the cursor repository.
use account_postgres_sink_repository::{CursorRepositoryError, DatabaseConfigError};

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Configuration error: {0}")]
    Config(#[from] DatabaseConfigError),
    #[error("Cursor repository error: {0}")]
    CursorRepository(#[from] CursorRepositoryError),
    #[error("Tracing error: {0}")]
    Tracing(String),
}
