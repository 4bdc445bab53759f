//! Project commands.

use crate::cli::{output, pick, Globals};
use crate::core::remote::Remote;
use crate::error::Result;

/// List projects of the active organization, marking the active one.
pub fn list(globals: &Globals, json: bool) -> Result<()> {
    let session = globals.session()?;
    let org = session.require_active_organization()?;
    let remote = globals.remote(session.config())?;
    let projects = remote.list_projects(&org.id)?;
    let active = session.context().project_id.as_deref();

    if json {
        output::data(&serde_json::to_string_pretty(&projects)?);
    } else if projects.is_empty() {
        output::dimmed(&format!("no projects in {}", org.name));
        output::hint(&format!("run: {}", output::cmd("windkeep project create <NAME>")));
    } else {
        output::header(&format!(
            "{} projects in {}",
            output::count(projects.len()),
            org.name
        ));
        output::rule();
        for project in &projects {
            output::list_item(&project.to_string(), Some(project.id.as_str()) == active);
        }
    }

    Ok(())
}

/// Select a project by slug or id, or pick one interactively.
pub fn switch(globals: &Globals, selector: Option<&str>) -> Result<()> {
    let mut session = globals.session()?;
    let org = session.require_active_organization()?;
    let remote = globals.remote(session.config())?;

    let project = match selector {
        Some(selector) => session.switch_project(&remote, selector)?,
        None => {
            let projects = remote.list_projects(&org.id)?;
            let current = session
                .context()
                .project_id
                .as_deref()
                .and_then(|id| projects.iter().position(|p| p.id == id));

            let Some(project) = pick::choose("Project", "project", &projects, current)? else {
                output::dimmed("cancelled");
                return Ok(());
            };
            session.select_project(project)?;
            project.clone()
        }
    };

    output::success(&format!(
        "switched to {} in {}",
        output::key(&project.slug),
        org.name
    ));
    Ok(())
}

/// Create a project in the active organization and select it.
pub fn create(globals: &Globals, name: &str, description: Option<String>) -> Result<()> {
    let mut session = globals.session()?;
    session.require_active_organization()?;
    let remote = globals.remote(session.config())?;

    let applied = session.create_project(&remote, name, description)?;
    output::success(&format!(
        "created {} and made it active",
        output::key(&applied.value.slug)
    ));
    if let Some(warning) = &applied.warning {
        output::persistence_warning(warning);
    }

    Ok(())
}

/// Rename the active project, or the one named by `--project`.
pub fn rename(globals: &Globals, name: &str, project: Option<&str>) -> Result<()> {
    let mut session = globals.session()?;
    let remote = globals.remote(session.config())?;
    let target = session.target_project(&remote, project)?;

    let applied = session.rename_project(&remote, &target.id, name)?;
    output::success(&format!(
        "renamed {} to {}",
        target.slug,
        output::key(&applied.value.to_string())
    ));
    if let Some(warning) = &applied.warning {
        output::persistence_warning(warning);
    }

    Ok(())
}

/// Delete a project after confirmation.
pub fn delete(globals: &Globals, project: Option<&str>, yes: bool) -> Result<()> {
    let mut session = globals.session()?;
    let remote = globals.remote(session.config())?;
    let target = session.target_project(&remote, project)?;

    if !yes
        && !pick::confirm(&format!(
            "Delete project {} and all of its secrets?",
            target.slug
        ))?
    {
        output::dimmed("cancelled");
        return Ok(());
    }

    let applied = session.delete_project(&remote, &target.id)?;
    output::success(&format!("deleted {}", output::key(&target.slug)));
    if let Some(warning) = &applied.warning {
        output::persistence_warning(warning);
    }

    Ok(())
}
