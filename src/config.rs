//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from
//! environment variables. Values are read through `dotenvy` so a local
//! `.env` file works without printing anything to stdout (the
//! interactive session owns that stream).

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Levels accepted for `ASSISTANT_LOG_LEVEL`.
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level for the stderr tracing output (default: "warn")
    pub log_level: String,

    /// Prompt printed before each command (default: "Enter a command: ")
    pub prompt: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_LOG_LEVEL`: one of error|warn|info|debug|trace
    ///   (default: "warn")
    /// - `ASSISTANT_PROMPT`: the interactive prompt (default:
    ///   "Enter a command: ")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level =
            env::var("ASSISTANT_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_LOG_LEVEL".to_string(),
                reason: format!(
                    "Must be one of {}, got: {}",
                    LOG_LEVELS.join("|"),
                    log_level
                ),
            });
        }

        let prompt =
            env::var("ASSISTANT_PROMPT").unwrap_or_else(|_| "Enter a command: ".to_string());
        if prompt.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_PROMPT".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config { log_level, prompt })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            prompt: "Enter a command: ".to_string(),
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
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.prompt, "Enter a command: ");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        env::remove_var("ASSISTANT_LOG_LEVEL");
        env::remove_var("ASSISTANT_PROMPT");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.prompt, "Enter a command: ");
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        let mut guard = EnvGuard::new();
        guard.set("ASSISTANT_LOG_LEVEL", "debug");
        guard.set("ASSISTANT_PROMPT", ">> ");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.prompt, ">> ");
    }

    #[test]
    #[serial]
    fn test_config_invalid_log_level() {
        let mut guard = EnvGuard::new();
        guard.set("ASSISTANT_LOG_LEVEL", "loud");

        let result = Config::from_env();
        assert!(result.is_err());
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "ASSISTANT_LOG_LEVEL");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_empty_prompt() {
        let mut guard = EnvGuard::new();
        guard.set("ASSISTANT_PROMPT", "   ");

        let result = Config::from_env();
        assert!(result.is_err());
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "ASSISTANT_PROMPT");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }
}
