//! Push command.
//!
//! Uploads `KEY=VALUE` lines from a file or stdin into one environment.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::cli::{output, Globals, Target};
use crate::core::constants::STDIO_PATH;
use crate::core::sync::{self, PushMode};
use crate::error::{Error, Result};

/// Push secrets from `file` (`-` for stdin).
pub fn execute(globals: &Globals, file: &Path, target: &Target, upsert: bool) -> Result<()> {
    let session = globals.session()?;
    let remote = globals.remote(session.config())?;
    let project = session.target_project(&remote, target.project.as_deref())?;
    let environment = session.config().environment(target.env);
    let mode = if upsert {
        PushMode::Upsert
    } else {
        PushMode::Create
    };

    let report = if file == Path::new(STDIO_PATH) {
        sync::push(&remote, &project, environment, &mut io::stdin().lock(), mode)?
    } else {
        if !file.is_file() {
            return Err(Error::not_found("file", file.display().to_string()));
        }
        let mut source = File::open(file)?;
        sync::push(&remote, &project, environment, &mut source, mode)?
    };

    if report.attempted == 0 {
        output::warn("no secrets found in input");
        return Ok(());
    }

    for failure in &report.failures {
        output::warn(&format!("{}: {}", output::key(&failure.key), failure.reason));
    }

    let summary = format!(
        "pushed {}/{} secrets to {} ({})",
        report.succeeded,
        report.attempted,
        output::key(&project.slug),
        environment
    );

    if !report.is_complete() {
        output::error(&summary);
        return Err(Error::Other(format!(
            "{} of {} secrets failed to push",
            report.failures.len(),
            report.attempted
        )));
    }

    output::success(&summary);
    if upsert {
        output::dimmed(&format!(
            "{} created, {} updated",
            report.created, report.updated
        ));
    }

    Ok(())
}
