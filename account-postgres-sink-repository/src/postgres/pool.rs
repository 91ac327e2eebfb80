use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::{
    AuthTokenSigner, CursorRepositoryError, DatabaseConfig, DatabaseConfigError, PasswordSource,
};

async fn resolve_password(
    config: &DatabaseConfig,
    signer: Option<&dyn AuthTokenSigner>,
) -> Result<Option<String>, DatabaseConfigError> {
    match config.password_source() {
        PasswordSource::Static(password) => Ok(Some(password)),
        PasswordSource::IamToken => {
            let signer =
                signer.ok_or_else(|| DatabaseConfigError::MissingSigner(config.host.clone()))?;
            Ok(Some(signer.auth_token(config).await?))
        }
        PasswordSource::None => Ok(None),
    }
}

/// Opens the connection pool described by `config`.
///
/// `signer` is required when the config resolves to IAM token authentication.
pub async fn connect(
    config: &DatabaseConfig,
    signer: Option<&dyn AuthTokenSigner>,
) -> Result<PgPool, DatabaseConfigError> {
    let password = resolve_password(config, signer).await?;
    let pool = config
        .pool_options()
        .connect_with(config.connect_options(password.as_deref()))
        .await?;

    info!(
        host = %config.host,
        port = config.port,
        database = ?config.database,
        pool_size = config.pool_size,
        password_source = ?config.password_source(),
        "Connected to PostgreSQL"
    );
    Ok(pool)
}

/// Signs a new token and installs it for connections the pool opens from now on.
pub async fn refresh_auth_token(
    pool: &PgPool,
    config: &DatabaseConfig,
    signer: &dyn AuthTokenSigner,
) -> Result<(), DatabaseConfigError> {
    let token = signer.auth_token(config).await?;
    pool.set_connect_options(config.connect_options(Some(&token)));
    Ok(())
}

/// Refreshes the pool's auth token every `every` until the pool is closed.
///
/// Failed refreshes are logged and retried on the next tick; existing
/// connections stay usable since tokens are only checked at login.
pub fn spawn_token_refresh(
    pool: PgPool,
    config: DatabaseConfig,
    signer: Arc<dyn AuthTokenSigner>,
    every: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // the first tick fires immediately and the pool already has a fresh token
        ticker.tick().await;

        loop {
            ticker.tick().await;
            if pool.is_closed() {
                debug!("Pool closed, stopping auth token refresh");
                break;
            }
            match refresh_auth_token(&pool, &config, signer.as_ref()).await {
                Ok(()) => debug!(host = %config.host, "Refreshed database auth token"),
                Err(e) => warn!(error = %e, "Failed to refresh database auth token"),
            }
        }
    })
}

/// Applies the embedded migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), CursorRepositoryError> {
    sqlx::migrate!("src/postgres/migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
