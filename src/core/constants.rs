//! Constants used throughout windkeep.
//!
//! Centralizes magic strings and configuration values.

/// Config directory relative to HOME (~/.windkeep).
pub const CONFIG_DIR: &str = ".windkeep";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Default local secrets file for pull and push.
pub const ENV_FILE: &str = ".env";

/// Path argument meaning stdin (push) or stdout (pull).
pub const STDIO_PATH: &str = "-";

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "https://windkeep.vercel.app";

/// Timeout applied to every remote request, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the stored API token.
pub const TOKEN_ENV: &str = "WINDKEEP_TOKEN";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "WINDKEEP_API_URL";

/// Environment variable overriding the config file path.
pub const CONFIG_ENV: &str = "WINDKEEP_CONFIG";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "WINDKEEP_LOG";

/// Maximum secret key length accepted by the service.
pub const MAX_KEY_LEN: usize = 50;

/// Maximum secret value length accepted by the service.
pub const MAX_VALUE_LEN: usize = 1000;
