//! Points API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 4000;

/// Default bind address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// What `GET /receipt/{id}/points` does when no receipt has that id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingReceiptPolicy {
    /// Respond `404 Not Found`.
    #[default]
    NotFound,

    /// Score an all-empty receipt and respond `200 OK`.
    ScoreEmpty,
}

impl FromStr for MissingReceiptPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "not_found" => Ok(MissingReceiptPolicy::NotFound),
            "score_empty" => Ok(MissingReceiptPolicy::ScoreEmpty),
            _ => Err(()),
        }
    }
}

impl fmt::Display for MissingReceiptPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingReceiptPolicy::NotFound => f.write_str("not_found"),
            MissingReceiptPolicy::ScoreEmpty => f.write_str("score_empty"),
        }
    }
}

/// Points API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Bind address (default: 0.0.0.0)
    pub bind_addr: String,

    /// HTTP port (default: 4000)
    pub port: u16,

    /// Behavior for points requests with an unknown id
    pub missing_receipt: MissingReceiptPolicy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            missing_receipt: MissingReceiptPolicy::default(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// - `POINTS_BIND_ADDR` (default `0.0.0.0`)
    /// - `POINTS_PORT` (default `4000`)
    /// - `POINTS_MISSING_RECEIPT`: `not_found` (default) or `score_empty`
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let bind_addr = lookup("POINTS_BIND_ADDR").unwrap_or(defaults.bind_addr);
        if bind_addr.trim().is_empty() {
            return Err(ConfigError::invalid("POINTS_BIND_ADDR", bind_addr));
        }

        let port = match lookup("POINTS_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid("POINTS_PORT", raw))?,
            None => defaults.port,
        };

        let missing_receipt = match lookup("POINTS_MISSING_RECEIPT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::invalid("POINTS_MISSING_RECEIPT", raw))?,
            None => defaults.missing_receipt,
        };

        Ok(ApiConfig {
            bind_addr,
            port,
            missing_receipt,
        })
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

impl ConfigError {
    fn invalid(key: &'static str, value: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key,
            value: value.into(),
        }
    }
}
