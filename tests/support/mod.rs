//! Test support utilities for windkeep integration tests.
//!
//! Provides an isolated home directory and helpers for seeding the stored
//! config. Nothing here talks to a real server: the API URL always points at
//! a closed local port.

#![allow(dead_code)]

pub mod assertions;

#[allow(unused_imports)]
pub use assertions::*;

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// API URL nothing listens on.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9";

/// Test environment with isolated temp directories.
///
/// Each test gets its own working dir and home dir. Child processes use
/// `.current_dir()` so tests can safely run in parallel.
pub struct Test {
    /// Working directory for the command
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new environment with no stored config.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Environment with a stored token but no context.
    pub fn logged_in() -> Self {
        let t = Self::new();
        t.write_config(&format!(
            "api_token = \"tok_test\"\napi_url = \"{}\"\n",
            UNREACHABLE_API
        ));
        t
    }

    /// Logged in with an active organization.
    pub fn with_org() -> Self {
        let t = Self::new();
        t.write_config(&format!(
            "api_token = \"tok_test\"\napi_url = \"{}\"\n\n[context]\norganization_id = \"org_1\"\norganization_name = \"Acme\"\n",
            UNREACHABLE_API
        ));
        t
    }

    /// Logged in with an active organization and project.
    pub fn with_project() -> Self {
        let t = Self::new();
        t.write_config(&format!(
            "api_token = \"tok_test\"\napi_url = \"{}\"\n\n[context]\norganization_id = \"org_1\"\norganization_name = \"Acme\"\nproject_id = \"proj_1\"\nproject_slug = \"api\"\nproject_name = \"API\"\n",
            UNREACHABLE_API
        ));
        t
    }

    /// Path of the stored config inside the temp home.
    pub fn config_path(&self) -> PathBuf {
        self.home.path().join(".windkeep").join("config.toml")
    }

    /// Seed the stored config.
    pub fn write_config(&self, contents: &str) {
        let path = self.config_path();
        std::fs::create_dir_all(path.parent().unwrap()).expect("failed to create config dir");
        std::fs::write(&path, contents).expect("failed to write config");
    }

    /// Stored config contents, if any.
    pub fn read_config(&self) -> Option<String> {
        std::fs::read_to_string(self.config_path()).ok()
    }

    /// Create a windkeep command isolated from the caller's environment.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("windkeep").expect("failed to find windkeep binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        for var in [
            "WINDKEEP_TOKEN",
            "WINDKEEP_API_URL",
            "WINDKEEP_CONFIG",
            "WINDKEEP_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.dir.path());
        cmd
    }
}
