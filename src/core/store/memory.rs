//! In-memory config storage for unit tests.
//!
//! Nothing survives the process. Saves can be made to fail on demand.

use std::cell::{Cell, RefCell};

use super::Store;
use crate::core::config::Config;
use crate::error::{ConfigError, Result};

/// In-memory config storage.
#[derive(Debug, Default)]
pub struct Memory {
    config: RefCell<Option<Config>>,
    fail_saves: Cell<bool>,
    saves: Cell<usize>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        let store = Self::default();
        store.config.replace(Some(config));
        store
    }

    /// Make subsequent `save` and `clear` calls fail.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves.get()
    }

    /// Currently stored document.
    pub fn stored(&self) -> Option<Config> {
        self.config.borrow().clone()
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_saves.get() {
            return Err(ConfigError::Unavailable("memory store is read-only".to_string()).into());
        }
        Ok(())
    }
}

impl Store for Memory {
    fn load(&self) -> Result<Option<Config>> {
        Ok(self.stored())
    }

    fn save(&self, config: &Config) -> Result<()> {
        self.check_writable()?;
        self.config.replace(Some(config.clone()));
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.check_writable()?;
        self.config.replace(None);
        Ok(())
    }
}
