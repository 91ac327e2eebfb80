use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_rds::auth_token::{AuthTokenGenerator, Config};
use tracing::debug;

use crate::{AuthTokenSigner, DatabaseConfig, DatabaseConfigError};

/// Signs RDS IAM auth tokens with the default AWS credential chain.
///
/// Tokens are valid for 15 minutes.
#[derive(Debug, Clone)]
pub struct RdsAuthTokenSigner {
    sdk_config: SdkConfig,
}

impl RdsAuthTokenSigner {
    /// Loads AWS credentials, signing for `region` when given and for the
    /// default chain's region otherwise.
    pub async fn load(region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        Self {
            sdk_config: loader.load().await,
        }
    }

    pub fn from_sdk_config(sdk_config: SdkConfig) -> Self {
        Self { sdk_config }
    }
}

#[async_trait]
impl AuthTokenSigner for RdsAuthTokenSigner {
    async fn auth_token(&self, config: &DatabaseConfig) -> Result<String, DatabaseConfigError> {
        let username = config
            .username
            .as_deref()
            .ok_or(DatabaseConfigError::MissingVar("PGUSER"))?;

        let generator = AuthTokenGenerator::new(
            Config::builder()
                .hostname(config.host.as_str())
                .port(u64::from(config.port))
                .username(username)
                .build()
                .map_err(DatabaseConfigError::auth_token)?,
        );
        let token = generator
            .auth_token(&self.sdk_config)
            .await
            .map_err(DatabaseConfigError::auth_token)?;

        debug!(host = %config.host, username, "Signed RDS auth token");
        Ok(token.as_str().to_string())
    }
}
