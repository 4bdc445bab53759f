//! Whoami command - show the current user and active context.

use tracing::debug;

use crate::cli::{output, Globals};
use crate::core::remote::Remote;
use crate::error::Result;

/// Print the authenticated user, active context and config location.
pub fn execute(globals: &Globals) -> Result<()> {
    let session = globals.session()?;
    let config = session.config();
    let remote = globals.remote(config)?;
    let user = remote.current_user()?;
    let context = session.context();

    output::header("User");
    output::rule();
    output::kv("name        ", user.display_name());
    output::kv("email       ", &user.email);
    output::blank();

    output::header("Context");
    output::rule();
    match &context.organization_id {
        Some(id) => match remote.get_organization(id) {
            Ok(org) => match org.role {
                Some(role) => output::kv("organization", format!("{} ({})", org.name, role)),
                None => output::kv("organization", &org.name),
            },
            Err(e) => {
                debug!(error = %e, "active organization not readable");
                let name = context.organization_name.as_deref().unwrap_or(id);
                output::kv("organization", format!("{} (unavailable)", name));
            }
        },
        None => output::kv("organization", "none"),
    }
    match (&context.project_name, &context.project_slug) {
        (Some(name), Some(slug)) => output::kv("project     ", format!("{} ({})", name, slug)),
        (_, Some(slug)) => output::kv("project     ", slug),
        _ => output::kv("project     ", "none"),
    }
    output::kv("environment ", config.environment(None));
    output::blank();

    output::kv("api         ", remote.base_url());
    output::kv("config      ", session.store().path().display());

    Ok(())
}
