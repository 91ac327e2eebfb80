//! Account Postgres Sink Entry Point
//!
//! Connects to the sink database, applies migrations and reports the stored
//! checkpoint.

use std::env;

use account_postgres_sink::{report_checkpoint, Dependencies, SinkError};
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging.
///
/// `LOG_FORMAT=json` switches to structured JSON output.
fn init_tracing() -> Result<(), SinkError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("account_postgres_sink=info,account_postgres_sink_repository=info")
    });

    let json = env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .try_init()
            .map_err(|e| SinkError::Tracing(e.to_string()))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .try_init()
            .map_err(|e| SinkError::Tracing(e.to_string()))?;
    }

    info!(
        service_name = "account-postgres-sink",
        service_version = env!("CARGO_PKG_VERSION"),
        json,
        "Tracing initialized"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), SinkError> {
    dotenv().ok();

    init_tracing()?;

    info!("Starting account postgres sink");

    let deps = match Dependencies::new().await {
        Ok(deps) => {
            info!("Dependencies initialized successfully");
            deps
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    let result = report_checkpoint(deps.cursor_repository.as_ref()).await;
    deps.shutdown().await;

    if let Err(e) = &result {
        error!(error = %e, "Failed to read checkpoint");
    }
    result.map(|_| ())
}
