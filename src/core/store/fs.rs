//! Filesystem-based config storage.
//!
//! Stores the config as TOML (by default `~/.windkeep/config.toml`).
//! Writes go through a sibling temp file and a rename so a crash never
//! leaves a half-written document behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Store;
use crate::core::config::Config;
use crate::error::{ConfigError, Result};

/// Filesystem-based config storage.
#[derive(Debug, Clone)]
pub struct Filesystem {
    path: PathBuf,
}

impl Filesystem {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.windkeep/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` if HOME cannot be determined.
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(Config::default_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn ensure_dir(&self) -> Result<()> {
        let Some(dir) = self.path.parent() else {
            return Ok(());
        };
        if dir.as_os_str().is_empty() || dir.exists() {
            return Ok(());
        }

        fs::create_dir_all(dir).map_err(ConfigError::WriteFile)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(dir, fs::Permissions::from_mode(0o700))
                .map_err(ConfigError::WriteFile)?;
        }

        Ok(())
    }
}

impl Store for Filesystem {
    fn load(&self) -> Result<Option<Config>> {
        debug!(path = %self.path.display(), "loading config");

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ConfigError::ReadFile(e).into()),
        };

        let config = Config::from_toml(&contents)?;
        debug!(
            authenticated = config.is_authenticated(),
            state = ?config.context.state(),
            "config loaded"
        );
        Ok(Some(config))
    }

    fn save(&self, config: &Config) -> Result<()> {
        debug!(path = %self.path.display(), "saving config");

        let contents = config.to_toml()?;
        self.ensure_dir()?;

        let tmp = self.temp_path();
        {
            let mut options = fs::OpenOptions::new();
            options.create(true).truncate(true).write(true);

            #[cfg(unix)]
            {
                use std::os::unix::fs::OpenOptionsExt;
                options.mode(0o600);
            }

            let mut file = options.open(&tmp).map_err(ConfigError::WriteFile)?;
            file.write_all(contents.as_bytes())
                .map_err(ConfigError::WriteFile)?;
            file.sync_all().map_err(ConfigError::WriteFile)?;
        }

        fs::rename(&tmp, &self.path).map_err(ConfigError::WriteFile)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        debug!(path = %self.path.display(), "removing config");

        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ConfigError::WriteFile(e).into()),
        }
    }
}
