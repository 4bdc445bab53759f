//! Config commands.

use crate::cli::{output, Globals};
use crate::core::domain::Environment;
use crate::error::Result;

/// Print the stored configuration with the token redacted.
pub fn show(globals: &Globals) -> Result<()> {
    let session = globals.session()?;
    let config = session.config();
    let context = session.context();

    output::header("Configuration");
    output::rule();
    output::kv("file        ", session.store().path().display());
    output::kv("api         ", config.api_url(globals.api_url.as_deref()));
    output::kv(
        "token       ",
        if globals.token.is_some() {
            "set (environment)"
        } else if config.is_authenticated() {
            "set"
        } else {
            "not set"
        },
    );
    output::kv("environment ", config.environment(None));
    output::kv(
        "organization",
        context.organization_name.as_deref().unwrap_or("none"),
    );
    output::kv(
        "project     ",
        context.project_slug.as_deref().unwrap_or("none"),
    );

    Ok(())
}

/// Store the environment used when `--env` is omitted.
pub fn set_env(globals: &Globals, environment: Environment) -> Result<()> {
    let mut session = globals.session()?;
    session.set_default_environment(environment)?;
    output::success(&format!("default environment set to {}", environment));
    Ok(())
}
