//! Child process execution.
//!
//! The child gets exactly the environment it is handed and inherits the
//! parent's stdin, stdout and stderr unbuffered.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use crate::error::{Error, Result};

/// Environment block handed to a child process.
pub type EnvBlock = BTreeMap<OsString, OsString>;

/// Process launcher.
pub trait Exec {
    /// Run `command` to completion and return its exit code.
    ///
    /// # Errors
    ///
    /// Returns `Error::LaunchFailure` if the process cannot be started.
    fn run(&self, command: &str, args: &[String], env: &EnvBlock) -> Result<i32>;
}

/// Launches real processes with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct System;

impl Exec for System {
    fn run(&self, command: &str, args: &[String], env: &EnvBlock) -> Result<i32> {
        debug!(command, args = args.len(), vars = env.len(), "spawning child");

        let status = Command::new(command)
            .args(args)
            .env_clear()
            .envs(env)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| Error::LaunchFailure {
                command: command.to_string(),
                source,
            })?;

        Ok(exit_code(status))
    }
}

/// Exit code of a finished child.
///
/// A child killed by a signal maps to `128 + signal`, the shell convention.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
