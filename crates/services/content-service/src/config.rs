//! Content service configuration.

use std::env;
use std::str::FromStr;

use common::{DatabaseConfig, DEFAULT_DATABASE_URL};

/// Content service configuration.
#[derive(Debug, Clone, Default)]
pub struct ContentServiceConfig {
    pub database: DatabaseConfig,
}

fn parsed<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

impl ContentServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// `CONTENT_SERVICE_DATABASE_URL` wins over `DATABASE_URL`. Values that
    /// fail to parse fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::default();
        Self {
            database: DatabaseConfig {
                url: env::var("CONTENT_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
                max_connections: parsed("DATABASE_MAX_CONNECTIONS", defaults.max_connections),
                min_connections: parsed("DATABASE_MIN_CONNECTIONS", defaults.min_connections),
                connect_timeout_seconds: parsed(
                    "DATABASE_CONNECT_TIMEOUT",
                    defaults.connect_timeout_seconds,
                ),
                sqlx_logging: parsed("DATABASE_SQLX_LOGGING", defaults.sqlx_logging),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_falls_back_on_garbage() {
        env::set_var("CONTENT_SERVICE_TEST_POOL", "many");
        assert_eq!(parsed("CONTENT_SERVICE_TEST_POOL", 4u32), 4);
        env::set_var("CONTENT_SERVICE_TEST_POOL", "12");
        assert_eq!(parsed("CONTENT_SERVICE_TEST_POOL", 4u32), 12);
        env::remove_var("CONTENT_SERVICE_TEST_POOL");
        assert_eq!(parsed("CONTENT_SERVICE_TEST_POOL", 4u32), 4);
    }
}
