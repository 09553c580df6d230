use core_config::{env_or_default, env_required, ConfigError, FromEnv};
use sea_orm::ConnectOptions;
use std::time::Duration;
use tracing::log::LevelFilter;

/// PostgreSQL database configuration
///
/// Holds the connection string and pool settings. Construct manually or
/// load from environment variables via [`FromEnv`].
///
/// Environment variables:
/// - `DATABASE_URL` (required)
/// - `DB_MAX_CONNECTIONS` (default 100)
/// - `DB_MIN_CONNECTIONS` (default 5)
/// - `DB_CONNECT_TIMEOUT_SECS` (default 8)
/// - `DB_ACQUIRE_TIMEOUT_SECS` (default 8)
/// - `DB_SQLX_LOGGING` (default true)
#[derive(Clone, Debug)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub acquire_timeout_secs: u64,
    pub sqlx_logging: bool,
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 100,
            min_connections: 5,
            connect_timeout_secs: 8,
            acquire_timeout_secs: 8,
            sqlx_logging: true,
        }
    }

    pub fn with_pool_size(url: impl Into<String>, max: u32, min: u32) -> Self {
        Self {
            max_connections: max,
            min_connections: min,
            ..Self::new(url)
        }
    }

    /// Convert to SeaORM [`ConnectOptions`]
    pub fn into_connect_options(self) -> ConnectOptions {
        let mut options = ConnectOptions::new(self.url);
        options
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .sqlx_logging(self.sqlx_logging)
            .sqlx_logging_level(LevelFilter::Info);
        options
    }
}

impl FromEnv for PostgresConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_required("DATABASE_URL")?;

        let parse_u32 = |key: &str, default: &str| -> Result<u32, ConfigError> {
            env_or_default(key, default)
                .parse()
                .map_err(|e| ConfigError::ParseError {
                    key: key.to_string(),
                    details: format!("{}", e),
                })
        };
        let parse_u64 = |key: &str, default: &str| -> Result<u64, ConfigError> {
            env_or_default(key, default)
                .parse()
                .map_err(|e| ConfigError::ParseError {
                    key: key.to_string(),
                    details: format!("{}", e),
                })
        };

        let max_connections = parse_u32("DB_MAX_CONNECTIONS", "100")?;
        let min_connections = parse_u32("DB_MIN_CONNECTIONS", "5")?;
        let connect_timeout_secs = parse_u64("DB_CONNECT_TIMEOUT_SECS", "8")?;
        let acquire_timeout_secs = parse_u64("DB_ACQUIRE_TIMEOUT_SECS", "8")?;
        let sqlx_logging = env_or_default("DB_SQLX_LOGGING", "true")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "DB_SQLX_LOGGING".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            connect_timeout_secs,
            acquire_timeout_secs,
            sqlx_logging,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_config_new() {
        let config = PostgresConfig::new("postgresql://localhost/test");
        assert_eq!(config.url, "postgresql://localhost/test");
        assert_eq!(config.max_connections, 100);
        assert_eq!(config.min_connections, 5);
    }

    #[test]
    fn test_postgres_config_with_pool_size() {
        let config = PostgresConfig::with_pool_size("postgresql://localhost/test", 50, 10);
        assert_eq!(config.max_connections, 50);
        assert_eq!(config.min_connections, 10);
    }

    #[test]
    fn test_postgres_config_from_env_minimal() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/testdb")),
                ("DB_MAX_CONNECTIONS", None),
                ("DB_MIN_CONNECTIONS", None),
            ],
            || {
                let config = PostgresConfig::from_env().unwrap();
                assert_eq!(config.url, "postgresql://localhost/testdb");
                assert_eq!(config.max_connections, 100);
                assert_eq!(config.min_connections, 5);
            },
        );
    }

    #[test]
    fn test_postgres_config_from_env_custom() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/testdb")),
                ("DB_MAX_CONNECTIONS", Some("50")),
                ("DB_MIN_CONNECTIONS", Some("10")),
                ("DB_CONNECT_TIMEOUT_SECS", Some("15")),
            ],
            || {
                let config = PostgresConfig::from_env().unwrap();
                assert_eq!(config.max_connections, 50);
                assert_eq!(config.min_connections, 10);
                assert_eq!(config.connect_timeout_secs, 15);
            },
        );
    }

    #[test]
    fn test_postgres_config_from_env_missing_url() {
        temp_env::with_var_unset("DATABASE_URL", || {
            let config = PostgresConfig::from_env();
            assert!(config.is_err());
            assert!(config.unwrap_err().to_string().contains("DATABASE_URL"));
        });
    }

    #[test]
    fn test_postgres_config_from_env_invalid_number() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/testdb")),
                ("DB_MAX_CONNECTIONS", Some("invalid")),
            ],
            || {
                let config = PostgresConfig::from_env();
                assert!(config.is_err());
                assert!(config
                    .unwrap_err()
                    .to_string()
                    .contains("DB_MAX_CONNECTIONS"));
            },
        );
    }
}
