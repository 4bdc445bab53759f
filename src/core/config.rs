//! Configuration document.
//!
//! Credentials, API endpoint, default environment and the active context,
//! stored as TOML by a [`crate::core::store::Store`].

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::constants;
use crate::core::domain::{ActiveContext, Environment};
use crate::error::{ConfigError, Result};

/// Persisted CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// API token saved by `login`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    /// API base URL saved by `login`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Environment used when `--env` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_environment: Option<Environment>,
    /// Active organization/project selection
    #[serde(default)]
    pub context: ActiveContext,
}

impl Config {
    /// Default location, `~/.windkeep/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` if HOME cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
    }

    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents).map_err(ConfigError::Parse)?)
    }

    /// Serialize to TOML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` on failure.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self).map_err(ConfigError::Serialize)?)
    }

    pub fn is_authenticated(&self) -> bool {
        self.api_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Resolve the API URL: explicit override, stored value, then the default.
    pub fn api_url<'a>(&'a self, explicit: Option<&'a str>) -> &'a str {
        explicit
            .or(self.api_url.as_deref())
            .unwrap_or(constants::DEFAULT_API_URL)
            .trim_end_matches('/')
    }

    /// Resolve the target environment: explicit flag, stored default, DEVELOPMENT.
    pub fn environment(&self, explicit: Option<Environment>) -> Environment {
        explicit
            .or(self.default_environment)
            .unwrap_or_default()
    }
}
