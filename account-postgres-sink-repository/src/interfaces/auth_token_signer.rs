use async_trait::async_trait;

use crate::{DatabaseConfig, DatabaseConfigError};

/// Produces passwords for IAM-authenticated database connections.
#[async_trait]
pub trait AuthTokenSigner: Send + Sync {
    /// Signs a fresh auth token for the host, port and user of `config`.
    async fn auth_token(&self, config: &DatabaseConfig) -> Result<String, DatabaseConfigError>;
}
