//! Configuration for the demonstration binary.
//!
//! This module handles loading configuration from environment variables,
//! with an optional `.env` file picked up via `dotenvy`.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the demonstration binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level filter (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config { log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
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
        assert_eq!(config.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults_when_unset() {
        env::remove_var("LOG_LEVEL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_config_from_env_reads_log_level() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_rejects_blank_log_level() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "   ");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "LOG_LEVEL");
        }
    }
}
