//! API server configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults:
//! - `BEVERAGE_HOST` — bind address (default: `"0.0.0.0"`)
//! - `BEVERAGE_PORT` — listen port (default: `8080`)
//! - `BEVERAGE_LOG` — tracing filter used when `RUST_LOG` is unset (default: `"info"`)

use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG: &str = "info";

/// API server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Bind address
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// Default tracing filter directive
    pub log_level: String,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("BEVERAGE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        if host.trim().is_empty() {
            return Err(ConfigError::InvalidValue("BEVERAGE_HOST".to_string()));
        }

        let port = match lookup("BEVERAGE_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BEVERAGE_PORT".to_string()))?,
            None => DEFAULT_PORT,
        };

        let log_level = lookup("BEVERAGE_LOG").unwrap_or_else(|| DEFAULT_LOG.to_string());

        Ok(ApiConfig {
            host,
            port,
            log_level,
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG.to_string(),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("BEVERAGE_HOST", "127.0.0.1"),
            ("BEVERAGE_PORT", " 9000 "),
            ("BEVERAGE_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:9000");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_port() {
        let err = ApiConfig::from_lookup(lookup_from(&[("BEVERAGE_PORT", "eighty")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for BEVERAGE_PORT");

        assert!(ApiConfig::from_lookup(lookup_from(&[("BEVERAGE_PORT", "70000")])).is_err());
    }

    #[test]
    fn test_blank_host() {
        assert!(ApiConfig::from_lookup(lookup_from(&[("BEVERAGE_HOST", "  ")])).is_err());
    }
}
