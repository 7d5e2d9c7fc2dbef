//! Configuration module - environment variable parsing

use std::env;

/// Server-side match configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    /// Number of pooled match slots allocated up front
    pub pool_capacity: usize,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let pool_capacity = match env::var("MATCH_POOL_CAPACITY") {
            Ok(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|cap| *cap > 0)
                .ok_or(ConfigError::InvalidCapacity(raw))?,
            Err(_) => 64,
        };

        Ok(Self {
            pool_capacity,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pool_capacity: 64,
            log_level: "info".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("MATCH_POOL_CAPACITY must be a positive integer, got {0:?}")]
    InvalidCapacity(String),
}
