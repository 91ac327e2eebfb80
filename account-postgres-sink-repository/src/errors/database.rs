use thiserror::Error;

/// Errors raised while configuring or opening the database connection.
#[derive(Debug, Error)]
pub enum DatabaseConfigError {
    #[error("Missing required variable {0}")]
    MissingVar(&'static str),

    #[error("No auth token signer configured for IAM host {0}")]
    MissingSigner(String),

    #[error("Failed to generate auth token: {0}")]
    AuthToken(String),

    #[error("Database error: {0}")]
    Connection(#[from] sqlx::Error),
}

impl DatabaseConfigError {
    pub fn auth_token(err: impl std::fmt::Display) -> Self {
        Self::AuthToken(err.to_string())
    }
}
