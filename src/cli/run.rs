//! Run command.
//!
//! Executes a command with an environment's secrets injected as variables.
//! Secrets are never written to disk.

use crate::cli::{Globals, Target};
use crate::core::exec::System;
use crate::core::sync;
use crate::error::{Error, Result};

/// Run `command` and exit with its exit code.
pub fn execute(globals: &Globals, target: &Target, command: &[String]) -> Result<()> {
    let Some((program, args)) = command.split_first() else {
        return Err(Error::Other("no command specified".to_string()));
    };

    let session = globals.session()?;
    let remote = globals.remote(session.config())?;
    let project = session.target_project(&remote, target.project.as_deref())?;
    let environment = session.config().environment(target.env);

    let code = sync::run(
        &remote,
        &project,
        environment,
        program,
        args,
        std::env::vars_os(),
        &System,
    )?;

    std::process::exit(code);
}
