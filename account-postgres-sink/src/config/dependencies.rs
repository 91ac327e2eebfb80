use std::sync::Arc;
use std::time::Duration;

use account_postgres_sink_repository::{
    connect, run_migrations, spawn_token_refresh, AuthTokenSigner, CursorRepository,
    DatabaseConfig, PasswordSource, PostgresCursorRepository, RdsAuthTokenSigner,
};
use sqlx::PgPool;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::errors::SinkError;

/// How often IAM auth tokens are regenerated. Tokens expire after 15 minutes.
pub const TOKEN_REFRESH_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// `Dependencies` holds the database components of the sink.
pub struct Dependencies {
    pub config: DatabaseConfig,
    pub pool: PgPool,
    pub cursor_repository: Arc<dyn CursorRepository>,
    /// Token rotation task, running only for IAM-authenticated hosts.
    pub token_refresh: Option<JoinHandle<()>>,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// See [`DatabaseConfig::from_env`] for the variables read.
    pub async fn new() -> Result<Self, SinkError> {
        Self::from_config(DatabaseConfig::from_env()?).await
    }

    /// Connects with `config`, applies migrations and starts token rotation
    /// when needed.
    pub async fn from_config(config: DatabaseConfig) -> Result<Self, SinkError> {
        info!(
            host = %config.host,
            port = config.port,
            database = ?config.database,
            pool_size = config.pool_size,
            rds = config.is_rds(),
            "Initializing dependencies"
        );

        let signer: Option<Arc<dyn AuthTokenSigner>> = match config.password_source() {
            PasswordSource::IamToken => Some(Arc::new(
                RdsAuthTokenSigner::load(config.aws_region.clone()).await,
            )),
            PasswordSource::Static(_) | PasswordSource::None => None,
        };

        let pool = connect(&config, signer.as_deref()).await?;
        Self::start(config, pool, signer).await
    }

    /// Migrates the connected `pool`, then starts token rotation when a
    /// `signer` is given.
    ///
    /// Closes the pool if migrations fail.
    async fn start(
        config: DatabaseConfig,
        pool: PgPool,
        signer: Option<Arc<dyn AuthTokenSigner>>,
    ) -> Result<Self, SinkError> {
        if let Err(e) = run_migrations(&pool).await {
            error!(error = %e, "Failed to apply migrations");
            pool.close().await;
            return Err(e.into());
        }

        let token_refresh = signer.map(|signer| {
            info!(
                interval_secs = TOKEN_REFRESH_INTERVAL.as_secs(),
                "Starting auth token rotation"
            );
            spawn_token_refresh(pool.clone(), config.clone(), signer, TOKEN_REFRESH_INTERVAL)
        });

        Ok(Self {
            cursor_repository: Arc::new(PostgresCursorRepository::new(pool.clone())),
            config,
            pool,
            token_refresh,
        })
    }

    /// Stops token rotation and closes the pool.
    pub async fn shutdown(self) {
        if let Some(handle) = self.token_refresh {
            handle.abort();
        }
        self.pool.close().await;
        info!("Database pool closed");
    }
}
