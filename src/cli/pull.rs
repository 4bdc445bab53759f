//! Pull command.
//!
//! Writes one environment's secrets as `KEY=VALUE` lines to a file or stdout.

use std::io::{self, Write};
use std::path::Path;

use zeroize::Zeroizing;

use crate::cli::{output, Globals, Target};
use crate::core::constants::STDIO_PATH;
use crate::core::{env, sync};
use crate::error::Result;

/// Pull secrets into `file` (`-` for stdout).
pub fn execute(globals: &Globals, file: &Path, target: &Target) -> Result<()> {
    let session = globals.session()?;
    let remote = globals.remote(session.config())?;
    let project = session.target_project(&remote, target.project.as_deref())?;
    let environment = session.config().environment(target.env);

    if file == Path::new(STDIO_PATH) {
        let stdout = io::stdout();
        sync::pull(&remote, &project, environment, &mut stdout.lock())?;
        return Ok(());
    }

    // Fetch fully before touching the destination so a failed request
    // leaves an existing file intact.
    let mut buffer = Zeroizing::new(Vec::new());
    let count = sync::pull(&remote, &project, environment, &mut *buffer)?;

    let mut out = env::create(file)?;
    out.write_all(&buffer)?;
    out.flush()?;

    if count == 0 {
        output::warn(&format!(
            "no secrets in {} for {}, wrote an empty {}",
            environment,
            project.slug,
            file.display()
        ));
    } else {
        output::success(&format!(
            "pulled {} secrets from {} ({}) into {}",
            output::count(count),
            output::key(&project.slug),
            environment,
            file.display()
        ));
    }

    Ok(())
}
