//! Flat `KEY=VALUE` codec.
//!
//! The format used by local secret files and process environment blocks.
//! It is deliberately not escape-aware: no quoting, no multi-line values.

use std::fs::{File, OpenOptions};
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Parse `KEY=VALUE` text into ordered pairs.
///
/// Blank lines, lines starting with `#` and lines without `=` are skipped.
/// Splits on the first `=` only; key and value are trimmed. A leading
/// byte order mark is ignored.
pub fn parse(text: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    for line in text.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            pairs.push((key.trim().to_string(), value.trim().to_string()));
        }
    }

    pairs
}

/// Serialize pairs as one `KEY=VALUE` line each, in iteration order.
///
/// Non-empty output always ends with a newline; no pairs yields an empty string.
pub fn serialize<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut output = String::new();

    for (key, value) in pairs {
        output.push_str(key.as_ref());
        output.push('=');
        output.push_str(value.as_ref());
        output.push('\n');
    }

    output
}

/// Read and parse a secrets file from disk.
///
/// # Errors
///
/// Returns error if the file cannot be read.
pub fn read(path: impl AsRef<Path>) -> Result<Vec<(String, String)>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading env file");
    let contents = std::fs::read_to_string(path)?;
    Ok(parse(&contents))
}

/// Create (or truncate) a secrets file with owner-only permissions.
///
/// # Errors
///
/// Returns error if the file cannot be opened for writing.
pub fn create(path: impl AsRef<Path>) -> Result<File> {
    let path = path.as_ref();
    debug!(path = %path.display(), "creating env file");

    let mut options = OpenOptions::new();
    options.create(true).truncate(true).write(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let file = options.open(path)?;

    // Existing files keep their old mode on open.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    }

    Ok(file)
}
