//! # Configuration
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                | Default              |
//! |-------------------------|----------------------|
//! | `CHANGE_DEFAULT_TARGET` | `123456`             |
//! | `CHANGE_DEFAULT_COINS`  | `5, 10, 25, 50, 100` |
//! | `CHANGE_MAX_TARGET`     | `10000000`           |
//!
//! Read-only after startup.

use change_core::{Amount, MAX_TARGET};
use serde::{Deserialize, Serialize};
use std::env;

/// Target pre-filled in the form when nothing else is given.
pub const DEFAULT_TARGET: Amount = 123_456;

/// Coin list pre-filled in the form when nothing else is given.
pub const DEFAULT_COINS: &str = "5, 10, 25, 50, 100";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Target used when the user does not supply one
    pub default_target: Amount,

    /// Coin text used when the user does not supply one
    pub default_coins: String,

    /// Largest target the validation layer lets through
    pub max_target: Amount,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            default_target: DEFAULT_TARGET,
            default_coins: DEFAULT_COINS.to_string(),
            max_target: MAX_TARGET,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let config = AppConfig {
            default_target: parse_var(&lookup, "CHANGE_DEFAULT_TARGET")?
                .unwrap_or(defaults.default_target),

            default_coins: lookup("CHANGE_DEFAULT_COINS").unwrap_or(defaults.default_coins),

            max_target: parse_var(&lookup, "CHANGE_MAX_TARGET")?.unwrap_or(defaults.max_target),
        };

        if config.max_target == 0 {
            return Err(ConfigError::InvalidValue("CHANGE_MAX_TARGET".to_string()));
        }

        Ok(config)
    }
}

fn parse_var<F>(lookup: &F, key: &str) -> Result<Option<Amount>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key.to_string()))
        })
        .transpose()
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
