//! Error types.
//!
//! Every failure surfaces as a single human-readable line. Context
//! preconditions and lookup misses are raised before any remote call is made.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Context(#[from] ContextError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },

    #[error("failed to launch '{command}': {source}")]
    LaunchFailure {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid environment '{0}' (use dev, staging, or prod)")]
    InvalidEnvironment(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Lookup miss for a named entity.
    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }
}

/// Active context preconditions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("not logged in")]
    NotAuthenticated,

    #[error("no active organization")]
    NoActiveOrganization,

    #[error("no active project")]
    NoActiveProject,

    #[error("project '{project}' belongs to organization {owner}, not the active organization {active}")]
    Mismatch {
        project: String,
        owner: String,
        active: String,
    },
}

/// Local configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to determine home directory")]
    NoHomeDir,

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to write config: {0}")]
    WriteFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("config store unavailable: {0}")]
    Unavailable(String),
}

/// Remote store failures. Opaque to the core and never retried.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// Input validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("secret key cannot be empty")]
    EmptyKey,

    #[error("invalid secret key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("secret value for '{0}' cannot be empty")]
    EmptyValue(String),

    #[error("secret value for '{key}' exceeds {max} characters")]
    ValueTooLong { key: String, max: usize },

    #[error("name cannot be empty")]
    EmptyName,
}

/// A remote mutation succeeded but the local context could not be saved.
///
/// Carried alongside a successful result, never returned as an `Err`.
#[derive(Error, Debug)]
#[error("remote change applied, but the local context could not be saved: {0}")]
pub struct PersistenceWarning(#[source] pub Box<Error>);

pub type Result<T> = std::result::Result<T, Error>;
