//! Local config storage.
//!
//! Abstracts where the [`Config`] document lives so the context state
//! machine never depends on the persistence mechanics.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `Store` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use crate::core::config::Config;
use crate::error::Result;

mod fs;
#[cfg(test)]
mod memory;

pub use fs::Filesystem;
#[cfg(test)]
pub use memory::Memory;

/// Config storage trait.
pub trait Store {
    /// Load the stored config.
    ///
    /// # Returns
    ///
    /// `None` if nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the document exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<Config>>;

    /// Durably replace the stored config.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the document cannot be written.
    fn save(&self, config: &Config) -> Result<()>;

    /// Remove the stored config. Clearing an empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the document exists but cannot be removed.
    fn clear(&self) -> Result<()>;
}

impl<S: Store + ?Sized> Store for &S {
    fn load(&self) -> Result<Option<Config>> {
        (**self).load()
    }

    fn save(&self, config: &Config) -> Result<()> {
        (**self).save(config)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}
