//! Validation rule configuration.
//!
//! Format rules are loaded from environment variables, with `.env` support.
//! Unset variables fall back to the placeholder rule.
//!
//! # Environment Variables
//!
//! - `STELLA_STORE_ID_FORMAT`: regex for `StoreId`
//! - `STELLA_STORE_NAME_FORMAT`: regex for `StoreName`
//! - `STELLA_STORE_ADDRESS_FORMAT`: regex for `StoreAddress`
//! - `STELLA_CONSUMER_ID_FORMAT`: regex for `ConsumerId`
//!
//! # Example
//!
//! ```rust,ignore
//! use stella_domain::config::ValidationConfig;
//!
//! let rules = ValidationConfig::from_env()?.into_rules();
//! ```

use std::env::{self, VarError};

use thiserror::Error;

use crate::validation::{FormatRule, FormatRules};

pub const STORE_ID_FORMAT_KEY: &str = "STELLA_STORE_ID_FORMAT";
pub const STORE_NAME_FORMAT_KEY: &str = "STELLA_STORE_NAME_FORMAT";
pub const STORE_ADDRESS_FORMAT_KEY: &str = "STELLA_STORE_ADDRESS_FORMAT";
pub const CONSUMER_ID_FORMAT_KEY: &str = "STELLA_CONSUMER_ID_FORMAT";

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The variable holds a pattern that does not compile.
    #[error("Invalid pattern for {key}: {source}")]
    InvalidPattern {
        /// The name of the environment variable.
        key: String,
        #[source]
        source: regex::Error,
    },
    /// The variable is set but is not valid Unicode.
    #[error("Invalid value for {key}: value is not valid Unicode")]
    NotUnicode {
        /// The name of the environment variable.
        key: String,
    },
}

/// Format rules resolved from configuration.
#[derive(Clone, Debug, Default)]
pub struct ValidationConfig {
    rules: FormatRules,
}

impl ValidationConfig {
    /// Loads configuration from environment variables.
    ///
    /// Loads a `.env` file first if one is present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPattern` if a variable holds a pattern
    /// that does not compile, and `ConfigError::NotUnicode` if a variable is
    /// not valid Unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env file");
        }
        Self::from_lookup(|key| env::var(key))
    }

    /// Resolves configuration through an arbitrary variable lookup.
    ///
    /// `lookup` has the contract of [`std::env::var`].
    ///
    /// # Errors
    ///
    /// Same as [`ValidationConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let rules = FormatRules::new(
            resolve_rule(&lookup, STORE_ID_FORMAT_KEY)?,
            resolve_rule(&lookup, STORE_NAME_FORMAT_KEY)?,
            resolve_rule(&lookup, STORE_ADDRESS_FORMAT_KEY)?,
            resolve_rule(&lookup, CONSUMER_ID_FORMAT_KEY)?,
        );
        tracing::info!(
            store_id = %rules.store_id(),
            store_name = %rules.store_name(),
            store_address = %rules.store_address(),
            consumer_id = %rules.consumer_id(),
            "validation rules configured"
        );
        Ok(Self { rules })
    }

    #[must_use]
    pub const fn rules(&self) -> &FormatRules {
        &self.rules
    }

    #[must_use]
    pub fn into_rules(self) -> FormatRules {
        self.rules
    }
}

fn resolve_rule<F>(lookup: &F, key: &str) -> Result<FormatRule, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(key) {
        Ok(pattern) => FormatRule::pattern(&pattern).map_err(|source| ConfigError::InvalidPattern {
            key: key.to_string(),
            source,
        }),
        Err(VarError::NotPresent) => {
            tracing::debug!(key, "format not configured, using placeholder");
            Ok(FormatRule::placeholder())
        }
        Err(VarError::NotUnicode(_)) => {
            tracing::warn!(key, "format variable is not valid Unicode");
            Err(ConfigError::NotUnicode {
                key: key.to_string(),
            })
        }
    }
}
