//! Token signer for tests and local development.
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::{AuthTokenSigner, DatabaseConfig, DatabaseConfigError};

/// Hands out `token-1`, `token-2`, ... and counts how often it was asked.
#[derive(Debug, Default)]
pub struct MockTokenSigner {
    issued: AtomicUsize,
    fail: bool,
}

impl MockTokenSigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// A signer whose every request fails.
    pub fn failing() -> Self {
        Self {
            issued: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthTokenSigner for MockTokenSigner {
    async fn auth_token(&self, _config: &DatabaseConfig) -> Result<String, DatabaseConfigError> {
        if self.fail {
            return Err(DatabaseConfigError::auth_token("mock signer failure"));
        }
        let issued = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("token-{issued}"))
    }
}
