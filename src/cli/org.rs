//! Organization commands.

use tracing::debug;

use crate::cli::{output, pick, Globals};
use crate::core::context::resolve_organization;
use crate::core::remote::Remote;
use crate::error::Result;

/// List organizations, marking the active one.
pub fn list(globals: &Globals, json: bool) -> Result<()> {
    let session = globals.session()?;
    let remote = globals.remote(session.config())?;
    let orgs = remote.list_organizations()?;
    let active = session.context().organization_id.as_deref();

    if json {
        output::data(&serde_json::to_string_pretty(&orgs)?);
    } else if orgs.is_empty() {
        output::dimmed("no organizations");
    } else {
        output::header(&format!("{} organizations", output::count(orgs.len())));
        output::rule();
        for org in &orgs {
            let label = match org.role {
                Some(role) => format!("{} ({}, {})", org.name, org.id, role),
                None => format!("{} ({})", org.name, org.id),
            };
            output::list_item(&label, Some(org.id.as_str()) == active);
        }
    }

    Ok(())
}

/// Select an organization by id or name, or pick one interactively.
pub fn switch(globals: &Globals, selector: Option<&str>) -> Result<()> {
    let mut session = globals.session()?;
    let remote = globals.remote(session.config())?;

    let org = match selector {
        Some(selector) => session.switch_organization(&remote, selector)?,
        None => {
            let orgs = remote.list_organizations()?;
            let current = session
                .context()
                .organization_id
                .as_deref()
                .and_then(|id| orgs.iter().position(|o| o.id == id));

            let Some(org) = pick::choose("Organization", "organization", &orgs, current)? else {
                output::dimmed("cancelled");
                return Ok(());
            };
            session.select_organization(org)?;
            org.clone()
        }
    };

    debug!(org = %org.id, "organization selected");
    output::success(&format!("switched to {}", output::key(&org.name)));
    output::hint(&format!("run: {}", output::cmd("windkeep project switch")));
    Ok(())
}

/// Rename the active organization, or the one named by `--org`.
pub fn rename(globals: &Globals, name: &str, org: Option<&str>) -> Result<()> {
    let mut session = globals.session()?;
    let remote = globals.remote(session.config())?;

    let id = match org {
        Some(selector) => resolve_organization(&remote, selector)?.id,
        None => session.require_active_organization()?.id,
    };

    let applied = session.rename_organization(&remote, &id, name)?;
    output::success(&format!("renamed organization to {}", output::key(&applied.value.name)));
    if let Some(warning) = &applied.warning {
        output::persistence_warning(warning);
    }

    Ok(())
}
