//! Configuration management for the address book server.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. Nothing is printed to stdout, which the MCP transport owns.

use crate::error::{ConfigError, ConfigResult};
use chrono::NaiveDate;
use std::env;

/// Configuration for the address book server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fixed "today" for birthday queries; the local date when unset
    pub today: Option<NaiveDate>,

    /// Server name reported to MCP clients (default: "address-book")
    pub server_name: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_TODAY`: pin "today" as `YYYY-MM-DD`
    /// - `ADDRESS_BOOK_SERVER_NAME`: MCP server name (default: "address-book")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() does not print to stdout
        let _ = dotenvy::dotenv();

        let today = Self::parse_env_date("ADDRESS_BOOK_TODAY")?;

        let server_name =
            env::var("ADDRESS_BOOK_SERVER_NAME").unwrap_or_else(|_| "address-book".to_string());
        if server_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_SERVER_NAME".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            today,
            server_name,
            log_level,
        })
    }

    /// Parse an optional `YYYY-MM-DD` environment variable.
    fn parse_env_date(var_name: &str) -> ConfigResult<Option<NaiveDate>> {
        match env::var(var_name) {
            Ok(val) => NaiveDate::parse_from_str(val.trim(), "%Y-%m-%d")
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a date in YYYY-MM-DD format, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            today: None,
            server_name: "address-book".to_string(),
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.today, None);
        assert_eq!(config.server_name, "address-book");
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_TODAY", "2024-01-06");
        guard.set("ADDRESS_BOOK_SERVER_NAME", "contacts");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 1, 6));
        assert_eq!(config.server_name, "contacts");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_invalid_today() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_TODAY", "06.01.2024");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "ADDRESS_BOOK_TODAY");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_empty_server_name() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_SERVER_NAME", "  ");

        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref var, .. }) if var == "ADDRESS_BOOK_SERVER_NAME"
        ));
    }

    #[test]
    #[serial]
    fn test_parse_env_date_missing() {
        env::remove_var("ADDRESS_BOOK_TEST_MISSING_DATE");
        let result = Config::parse_env_date("ADDRESS_BOOK_TEST_MISSING_DATE");
        assert_eq!(result.unwrap(), None);
    }
}
