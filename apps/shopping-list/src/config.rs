//! Configuration for the shopping list application.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Default log filter when neither `RUST_LOG` nor `SHOPPING_LIST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "shopping_list=info,shopkeep_runtime=info";

/// Errors raised while reading configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A boolean variable held something other than a recognised flag value
    #[error("{var} must be a boolean (true/false, 1/0, yes/no, on/off), got {value:?}")]
    InvalidBool {
        /// Variable name
        var: &'static str,
        /// Offending value
        value: String,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Start with the demo items (`SHOPPING_LIST_SEED`, default: true)
    pub seed_items: bool,
    /// Initial value of the checked-item filter (`SHOPPING_LIST_HIDE_CHECKED`, default: false)
    pub hide_checked_items: bool,
    /// Reject blank item names (`SHOPPING_LIST_REJECT_EMPTY_NAMES`, default: false)
    pub reject_empty_names: bool,
    /// Log filter used when `RUST_LOG` is unset (`SHOPPING_LIST_LOG`)
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_items: true,
            hide_checked_items: false,
            reject_empty_names: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBool`] if a flag variable is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBool`] if a flag variable is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag = |var: &'static str, default: bool| -> Result<bool, ConfigError> {
            lookup(var).map_or(Ok(default), |value| parse_bool(var, &value))
        };

        Ok(Self {
            seed_items: flag("SHOPPING_LIST_SEED", defaults.seed_items)?,
            hide_checked_items: flag("SHOPPING_LIST_HIDE_CHECKED", defaults.hide_checked_items)?,
            reject_empty_names: flag(
                "SHOPPING_LIST_REJECT_EMPTY_NAMES",
                defaults.reject_empty_names,
            )?,
            log_filter: lookup("SHOPPING_LIST_LOG").unwrap_or(defaults.log_filter),
        })
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(load(&[]), Ok(AppConfig::default()));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("SHOPPING_LIST_SEED", "no"),
            ("SHOPPING_LIST_HIDE_CHECKED", "ON"),
            ("SHOPPING_LIST_REJECT_EMPTY_NAMES", " 1 "),
            ("SHOPPING_LIST_LOG", "debug"),
        ]);

        assert_eq!(
            config,
            Ok(AppConfig {
                seed_items: false,
                hide_checked_items: true,
                reject_empty_names: true,
                log_filter: "debug".to_string(),
            })
        );
    }

    #[test]
    fn test_invalid_bool() {
        assert_eq!(
            load(&[("SHOPPING_LIST_SEED", "maybe")]),
            Err(ConfigError::InvalidBool {
                var: "SHOPPING_LIST_SEED",
                value: "maybe".to_string(),
            })
        );
    }
}
