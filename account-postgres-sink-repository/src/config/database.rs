use std::env;
use std::fmt;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::ConnectOptions;
use tracing::warn;

use crate::DatabaseConfigError;

/// Hostname fragment of AWS RDS endpoints, which authenticate with IAM tokens.
pub const RDS_HOST_PATTERN: &str = "rds.amazonaws.com";

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5432;
const DEFAULT_POOL_SIZE: u32 = 20;
const MIN_CONNECTIONS: u32 = 5;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(60);
const IDLE_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the connection password comes from.
#[derive(Clone, PartialEq, Eq)]
pub enum PasswordSource {
    /// `PGPASSWORD` as given.
    Static(String),
    /// A short-lived IAM auth token, regenerated periodically.
    IamToken,
    None,
}

impl fmt::Debug for PasswordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(_) => f.write_str("Static(..)"),
            Self::IamToken => f.write_str("IamToken"),
            Self::None => f.write_str("None"),
        }
    }
}

/// PostgreSQL connection and pool settings.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub database: Option<String>,
    pub password: Option<String>,
    pub pool_size: u32,
    pub aws_region: Option<String>,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("database", &self.database)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("pool_size", &self.pool_size)
            .field("aws_region", &self.aws_region)
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            username: None,
            database: None,
            password: None,
            pool_size: DEFAULT_POOL_SIZE,
            aws_region: None,
        }
    }
}

impl DatabaseConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Environment Variables
    ///
    /// - `PGHOST`: database host (default: localhost)
    /// - `PGPORT`: database port (default: 5432, also used when unparsable)
    /// - `PGUSER`: user name
    /// - `PGDATABASE`: database name
    /// - `PGPASSWORD`: password; when unset, RDS hosts use IAM auth tokens
    /// - `PG_POOL_SIZE`: maximum pool connections (default: 20, also used when
    ///   unparsable or zero)
    /// - `AWS_REGION`: region used to sign IAM auth tokens
    pub fn from_env() -> Result<Self, DatabaseConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DatabaseConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let port = match var("PGPORT") {
            Some(value) => value.parse::<u16>().unwrap_or_else(|_| {
                warn!(value = %value, "Invalid PGPORT, defaulting to {}", DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };
        let pool_size = match var("PG_POOL_SIZE") {
            Some(value) => match value.parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => {
                    warn!(
                        value = %value,
                        "Invalid PG_POOL_SIZE, defaulting to {}", DEFAULT_POOL_SIZE
                    );
                    DEFAULT_POOL_SIZE
                }
            },
            None => DEFAULT_POOL_SIZE,
        };

        Ok(Self {
            host: var("PGHOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            username: var("PGUSER"),
            database: var("PGDATABASE"),
            password: var("PGPASSWORD"),
            pool_size,
            aws_region: var("AWS_REGION"),
        })
    }

    pub fn is_rds(&self) -> bool {
        self.host.contains(RDS_HOST_PATTERN)
    }

    /// An explicit password always wins; RDS hosts without one use IAM tokens.
    pub fn password_source(&self) -> PasswordSource {
        match (&self.password, self.is_rds()) {
            (Some(password), _) => PasswordSource::Static(password.clone()),
            (None, true) => PasswordSource::IamToken,
            (None, false) => PasswordSource::None,
        }
    }

    /// Connection options using `password`, or none.
    ///
    /// IAM connections require TLS but skip certificate verification.
    pub fn connect_options(&self, password: Option<&str>) -> PgConnectOptions {
        let mut options = PgConnectOptions::new_without_pgpass()
            .host(&self.host)
            .port(self.port)
            .disable_statement_logging();
        if let Some(username) = &self.username {
            options = options.username(username);
        }
        if let Some(database) = &self.database {
            options = options.database(database);
        }
        if let Some(password) = password {
            options = options.password(password);
        }
        if self.password_source() == PasswordSource::IamToken {
            options = options.ssl_mode(PgSslMode::Require);
        }
        options
    }

    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.pool_size)
            .min_connections(MIN_CONNECTIONS.min(self.pool_size))
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .idle_timeout(IDLE_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<DatabaseConfig, DatabaseConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DatabaseConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config, DatabaseConfig::default());
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.pool_size, 20);
        assert_eq!(config.password_source(), PasswordSource::None);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = config(&[
            ("PGHOST", "db.internal"),
            ("PGPORT", "6432"),
            ("PGUSER", "sink"),
            ("PGDATABASE", "accounts"),
            ("PGPASSWORD", "secret"),
            ("PG_POOL_SIZE", "8"),
            ("AWS_REGION", "us-east-1"),
        ])
        .unwrap();

        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 6432);
        assert_eq!(config.username.as_deref(), Some("sink"));
        assert_eq!(config.database.as_deref(), Some("accounts"));
        assert_eq!(config.pool_size, 8);
        assert_eq!(config.aws_region.as_deref(), Some("us-east-1"));
        assert_eq!(
            config.password_source(),
            PasswordSource::Static("secret".to_string())
        );
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config = config(&[("PGHOST", ""), ("PGPASSWORD", "")]).unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.password, None);
    }

    #[test]
    fn test_invalid_numbers_fall_back_to_defaults() {
        let unparsable = config(&[("PGPORT", "not-a-port"), ("PG_POOL_SIZE", "0")]).unwrap();
        assert_eq!(unparsable.port, 5432);
        assert_eq!(unparsable.pool_size, 20);

        let out_of_range = config(&[("PGPORT", "70000"), ("PG_POOL_SIZE", "many")]).unwrap();
        assert_eq!(out_of_range.port, 5432);
        assert_eq!(out_of_range.pool_size, 20);
    }

    #[test]
    fn test_rds_host_uses_iam_token() {
        let config = config(&[(
            "PGHOST",
            "sink.cluster-abc123.us-east-1.rds.amazonaws.com",
        )])
        .unwrap();
        assert!(config.is_rds());
        assert_eq!(config.password_source(), PasswordSource::IamToken);

        let options = config.connect_options(Some("token"));
        assert!(matches!(options.get_ssl_mode(), PgSslMode::Require));
    }

    #[test]
    fn test_password_overrides_iam_token() {
        let config = config(&[
            ("PGHOST", "sink.cluster-abc123.us-east-1.rds.amazonaws.com"),
            ("PGPASSWORD", "secret"),
        ])
        .unwrap();
        assert_eq!(
            config.password_source(),
            PasswordSource::Static("secret".to_string())
        );
    }

    #[test]
    fn test_connect_options() {
        let config = config(&[
            ("PGHOST", "db.internal"),
            ("PGPORT", "6432"),
            ("PGUSER", "sink"),
            ("PGDATABASE", "accounts"),
        ])
        .unwrap();
        let options = config.connect_options(None);

        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6432);
        assert_eq!(options.get_username(), "sink");
        assert_eq!(options.get_database(), Some("accounts"));
    }

    #[test]
    fn test_debug_hides_password() {
        let config = config(&[("PGPASSWORD", "secret")]).unwrap();
        assert!(!format!("{config:?}").contains("secret"));
    }

    #[test]
    fn test_min_connections_never_exceed_pool_size() {
        let config = config(&[("PG_POOL_SIZE", "2")]).unwrap();
        let options = config.pool_options();
        assert_eq!(options.get_max_connections(), 2);
        assert_eq!(options.get_min_connections(), 2);
    }
}
