//! Configuration management for the wellspring application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. It covers the listen address,
//! the database location, and the analysis service parameters.
//!
//! # Environment Variables
//!
//! - `WELLSPRING_DB`: Path to the SQLite database file (defaults to ./wellspring.db)
//! - `WELLSPRING_ADDR`: Address to bind the HTTP server to (defaults to 127.0.0.1:3001)
//! - `WELLSPRING_OLLAMA_URL`: Base URL of the Ollama service (defaults to http://127.0.0.1:11434)
//! - `WELLSPRING_MODEL`: Model used for entry analysis (defaults to "llama2")
//! - `WELLSPRING_AI_TIMEOUT_SECS`: Deadline for one analysis request (defaults to 30)
//! - `WELLSPRING_MAX_ENTRY_LEN`: Maximum entry length in characters (defaults to 10000)

use crate::constants::{
    DEFAULT_AI_TIMEOUT_SECS, DEFAULT_ANALYSIS_MODEL, DEFAULT_BIND_ADDR, DEFAULT_DB_FILE,
    DEFAULT_MAX_ENTRY_LEN, DEFAULT_OLLAMA_URL, ENV_VAR_ADDR, ENV_VAR_AI_TIMEOUT_SECS,
    ENV_VAR_DB, ENV_VAR_MAX_ENTRY_LEN, ENV_VAR_MODEL, ENV_VAR_OLLAMA_URL,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the wellspring application.
///
/// This struct holds the settings needed to run the server: where to listen,
/// where the database lives, and how to reach the analysis service.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use wellspring::Config;
/// use std::path::PathBuf;
/// use std::time::Duration;
///
/// let config = Config {
///     db_path: PathBuf::from("/tmp/journal.db"),
///     bind_addr: "127.0.0.1:3001".to_string(),
///     ollama_url: "http://127.0.0.1:11434".to_string(),
///     analysis_model: "llama2".to_string(),
///     ai_timeout: Duration::from_secs(30),
///     max_entry_len: 10_000,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file.
    pub db_path: PathBuf,

    /// Address the HTTP server binds to, as `host:port`.
    pub bind_addr: String,

    /// Base URL of the Ollama analysis service, without a trailing slash.
    pub ollama_url: String,

    /// Model name passed to the analysis service.
    pub analysis_model: String,

    /// Upper bound on how long a single analysis request may take.
    pub ai_timeout: Duration,

    /// Maximum accepted journal entry length, in characters.
    pub max_entry_len: usize,
}

impl Config {
    /// Loads configuration from environment variables, applying defaults for
    /// anything unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when a numeric variable is set but does not
    /// parse.
    pub fn load() -> AppResult<Self> {
        let db_path = env::var(ENV_VAR_DB)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_FILE));

        let bind_addr = env::var(ENV_VAR_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let ollama_url = env::var(ENV_VAR_OLLAMA_URL)
            .unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let analysis_model =
            env::var(ENV_VAR_MODEL).unwrap_or_else(|_| DEFAULT_ANALYSIS_MODEL.to_string());

        let ai_timeout_secs = match env::var(ENV_VAR_AI_TIMEOUT_SECS) {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                AppError::Config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    ENV_VAR_AI_TIMEOUT_SECS, raw
                ))
            })?,
            Err(_) => DEFAULT_AI_TIMEOUT_SECS,
        };

        let max_entry_len = match env::var(ENV_VAR_MAX_ENTRY_LEN) {
            Ok(raw) => raw.parse::<usize>().map_err(|_| {
                AppError::Config(format!(
                    "{} must be a whole number of characters, got '{}'",
                    ENV_VAR_MAX_ENTRY_LEN, raw
                ))
            })?,
            Err(_) => DEFAULT_MAX_ENTRY_LEN,
        };

        Ok(Config {
            db_path,
            bind_addr,
            ollama_url,
            analysis_model,
            ai_timeout: Duration::from_secs(ai_timeout_secs),
            max_entry_len,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when:
    /// - the bind address is not a valid `host:port`
    /// - the analysis service URL is not an http(s) URL
    /// - the analysis model name is empty
    /// - the analysis deadline is zero
    /// - the maximum entry length is zero
    pub fn validate(&self) -> AppResult<()> {
        self.bind_addr.parse::<SocketAddr>().map_err(|_| {
            AppError::Config(format!(
                "Bind address must be host:port, got '{}'",
                self.bind_addr
            ))
        })?;

        if !self.ollama_url.starts_with("http://") && !self.ollama_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "Analysis service URL must start with http:// or https://, got '{}'",
                self.ollama_url
            )));
        }

        if self.analysis_model.trim().is_empty() {
            return Err(AppError::Config(
                "Analysis model name cannot be empty".to_string(),
            ));
        }

        if self.ai_timeout.is_zero() {
            return Err(AppError::Config(
                "Analysis deadline must be at least one second".to_string(),
            ));
        }

        if self.max_entry_len == 0 {
            return Err(AppError::Config(
                "Maximum entry length must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [
            ENV_VAR_DB,
            ENV_VAR_ADDR,
            ENV_VAR_OLLAMA_URL,
            ENV_VAR_MODEL,
            ENV_VAR_AI_TIMEOUT_SECS,
            ENV_VAR_MAX_ENTRY_LEN,
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        clear_env();
        let config = Config::load().unwrap();

        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_FILE));
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.ollama_url, DEFAULT_OLLAMA_URL);
        assert_eq!(config.analysis_model, DEFAULT_ANALYSIS_MODEL);
        assert_eq!(config.ai_timeout, Duration::from_secs(DEFAULT_AI_TIMEOUT_SECS));
        assert_eq!(config.max_entry_len, DEFAULT_MAX_ENTRY_LEN);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_from_env() {
        clear_env();
        env::set_var(ENV_VAR_DB, "/tmp/custom.db");
        env::set_var(ENV_VAR_ADDR, "0.0.0.0:9000");
        env::set_var(ENV_VAR_OLLAMA_URL, "http://ollama.local:11434/");
        env::set_var(ENV_VAR_MODEL, "llama3.2:3b");
        env::set_var(ENV_VAR_AI_TIMEOUT_SECS, "5");
        env::set_var(ENV_VAR_MAX_ENTRY_LEN, "200");

        let config = Config::load().unwrap();
        clear_env();

        assert_eq!(config.db_path, PathBuf::from("/tmp/custom.db"));
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        // Trailing slash is stripped so URL joining stays predictable.
        assert_eq!(config.ollama_url, "http://ollama.local:11434");
        assert_eq!(config.analysis_model, "llama3.2:3b");
        assert_eq!(config.ai_timeout, Duration::from_secs(5));
        assert_eq!(config.max_entry_len, 200);
    }

    #[test]
    #[serial]
    fn test_load_rejects_bad_timeout() {
        clear_env();
        env::set_var(ENV_VAR_AI_TIMEOUT_SECS, "soon");

        let result = Config::load();
        clear_env();

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_bind_addr() {
        let mut config = valid_config();
        config.bind_addr = "not-an-address".to_string();
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let mut config = valid_config();
        config.ollama_url = "ftp://127.0.0.1".to_string();
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let mut config = valid_config();
        config.max_entry_len = 0;
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let mut config = valid_config();
        config.ai_timeout = Duration::ZERO;
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    fn valid_config() -> Config {
        Config {
            db_path: PathBuf::from("/tmp/test.db"),
            bind_addr: "127.0.0.1:3001".to_string(),
            ollama_url: "http://127.0.0.1:11434".to_string(),
            analysis_model: "llama2".to_string(),
            ai_timeout: Duration::from_secs(30),
            max_entry_len: 10_000,
        }
    }
}
