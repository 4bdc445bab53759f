//! Deployment environment a secret value is scoped to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the three deployment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// All environments in display order.
    pub const ALL: [Environment; 3] = [
        Environment::Development,
        Environment::Staging,
        Environment::Production,
    ];

    /// Normalize a free-text name or alias.
    ///
    /// Case-insensitive. Accepts `dev`/`development`, `stage`/`staging`,
    /// `prod`/`production`.
    pub fn from_alias(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" => Some(Self::Development),
            "stage" | "staging" => Some(Self::Staging),
            "prod" | "production" => Some(Self::Production),
            _ => None,
        }
    }

    /// Canonical wire name (`DEVELOPMENT`, `STAGING`, `PRODUCTION`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "DEVELOPMENT",
            Self::Staging => "STAGING",
            Self::Production => "PRODUCTION",
        }
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_alias(s).ok_or_else(|| Error::InvalidEnvironment(s.to_string()))
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
