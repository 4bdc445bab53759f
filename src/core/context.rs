//! Active context state machine.
//!
//! A [`Session`] is loaded once per invocation and passed to whatever needs
//! the active organization or project. Every transition that changes the
//! persisted context is saved before it returns. When the change follows a
//! remote mutation that already succeeded, a failed save is downgraded to a
//! [`PersistenceWarning`] instead of an error.

use tracing::{debug, info, warn};

use crate::core::config::Config;
use crate::core::domain::{
    ActiveContext, ActiveOrganization, ActiveProject, Environment, NewProject, Organization,
    Project, ProjectUpdate,
};
use crate::core::remote::Remote;
use crate::core::store::Store;
use crate::core::validation;
use crate::error::{Error, PersistenceWarning, Result};

/// Result of an operation whose remote side effect already happened.
#[derive(Debug)]
pub struct Applied<T> {
    pub value: T,
    pub warning: Option<PersistenceWarning>,
}

impl<T> Applied<T> {
    fn new(value: T, warning: Option<PersistenceWarning>) -> Self {
        Self { value, warning }
    }
}

/// Loaded configuration bound to the store it came from.
#[derive(Debug)]
pub struct Session<S: Store> {
    store: S,
    config: Config,
}

impl<S: Store> Session<S> {
    /// Load the stored config; an empty store yields the default (no context).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the stored document cannot be read.
    pub fn load(store: S) -> Result<Self> {
        let config = store.load()?.unwrap_or_default();
        Ok(Self { store, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn context(&self) -> &ActiveContext {
        &self.config.context
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// # Errors
    ///
    /// `NoActiveOrganization` when nothing is selected.
    pub fn require_active_organization(&self) -> Result<ActiveOrganization> {
        Ok(self.config.context.require_active_organization()?)
    }

    /// # Errors
    ///
    /// `NoActiveProject` unless a project is selected.
    pub fn require_active_project(&self) -> Result<ActiveProject> {
        Ok(self.config.context.require_active_project()?)
    }

    /// Project targeted by a sync command.
    ///
    /// Without an override this is the active project. With one, the slug
    /// (or id) is resolved inside the active organization; the persisted
    /// selection does not change.
    ///
    /// # Errors
    ///
    /// `NoActiveProject`/`NoActiveOrganization` before any remote call,
    /// `NotFound` if the override matches nothing.
    pub fn target_project<R: Remote + ?Sized>(
        &self,
        remote: &R,
        project: Option<&str>,
    ) -> Result<ActiveProject> {
        match project {
            None => self.require_active_project(),
            Some(selector) => {
                let org = self.require_active_organization()?;
                let found = resolve_project(remote, &org.id, selector)?;
                Ok(ActiveProject::from(&found))
            }
        }
    }

    /// Store credentials. The active context is left as it was.
    ///
    /// # Errors
    ///
    /// Returns error if the config cannot be saved.
    pub fn login(&mut self, token: &str, api_url: Option<&str>) -> Result<()> {
        let before = self.config.clone();
        self.config.api_token = Some(token.to_string());
        if let Some(url) = api_url {
            self.config.api_url = Some(url.trim_end_matches('/').to_string());
        }
        self.commit(before)
    }

    /// Forget credentials and context.
    ///
    /// # Errors
    ///
    /// Returns error if the stored config cannot be removed.
    pub fn logout(&mut self) -> Result<()> {
        self.store.clear()?;
        self.config = Config::default();
        info!("logged out");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns error if the config cannot be saved.
    pub fn set_default_environment(&mut self, environment: Environment) -> Result<()> {
        let before = self.config.clone();
        self.config.default_environment = Some(environment);
        self.commit(before)
    }

    /// Make `org` active, dropping any selected project.
    ///
    /// # Errors
    ///
    /// Returns error if the config cannot be saved; the context is then unchanged.
    pub fn select_organization(&mut self, org: &Organization) -> Result<()> {
        let before = self.config.clone();
        self.config.context.select_organization(org);
        debug!(org = %org.id, "selected organization");
        self.commit(before)
    }

    /// Make `project` active. It must belong to the active organization.
    ///
    /// # Errors
    ///
    /// `ContextError::Mismatch` (context unchanged) or a save failure.
    pub fn select_project(&mut self, project: &Project) -> Result<()> {
        let before = self.config.clone();
        self.config.context.select_project(project)?;
        debug!(project = %project.id, "selected project");
        self.commit(before)
    }

    /// Resolve `selector` (id or exact name) among the user's organizations and select it.
    ///
    /// # Errors
    ///
    /// `NotFound` on a miss, `RemoteError` if listing fails.
    pub fn switch_organization<R: Remote + ?Sized>(
        &mut self,
        remote: &R,
        selector: &str,
    ) -> Result<Organization> {
        let org = resolve_organization(remote, selector)?;
        self.select_organization(&org)?;
        Ok(org)
    }

    /// Resolve `selector` (slug or id) inside the active organization and select it.
    ///
    /// # Errors
    ///
    /// `NoActiveOrganization` before any remote call, `NotFound` on a miss.
    pub fn switch_project<R: Remote + ?Sized>(
        &mut self,
        remote: &R,
        selector: &str,
    ) -> Result<Project> {
        let org = self.require_active_organization()?;
        let project = resolve_project(remote, &org.id, selector)?;
        self.select_project(&project)?;
        Ok(project)
    }

    /// Rename an organization remotely and refresh the cached name if it is active.
    ///
    /// # Errors
    ///
    /// `ValidationError::EmptyName` before the remote call, `RemoteError` if it fails.
    pub fn rename_organization<R: Remote + ?Sized>(
        &mut self,
        remote: &R,
        id: &str,
        name: &str,
    ) -> Result<Applied<Organization>> {
        let name = non_empty(name)?;
        let org = remote.rename_organization(id, name)?;

        let warning = if self.config.context.rename_organization(&org) {
            self.commit_after_remote()
        } else {
            None
        };
        Ok(Applied::new(org, warning))
    }

    /// Create a project in the active organization and select it.
    ///
    /// # Errors
    ///
    /// `NoActiveOrganization` or `EmptyName` before the remote call,
    /// `RemoteError` if creation fails. If the service files the project
    /// under another organization it is left unselected with a warning.
    pub fn create_project<R: Remote + ?Sized>(
        &mut self,
        remote: &R,
        name: &str,
        description: Option<String>,
    ) -> Result<Applied<Project>> {
        let org = self.require_active_organization()?;
        let name = non_empty(name)?;

        let request = NewProject::new(name, org.id).with_description(description);
        let project = remote.create_project(&request)?;
        info!(project = %project.id, slug = %project.slug, "created project");

        // The project exists remotely now; a refused selection only warns.
        let warning = match self.config.context.select_project(&project) {
            Ok(()) => self.commit_after_remote(),
            Err(err) => {
                warn!(project = %project.id, error = %err, "created project was not selected");
                Some(PersistenceWarning(Box::new(err.into())))
            }
        };
        Ok(Applied::new(project, warning))
    }

    /// Rename a project (re-deriving its slug) and refresh the cache if it is active.
    ///
    /// # Errors
    ///
    /// `EmptyName` before the remote call, `RemoteError` if the update fails.
    pub fn rename_project<R: Remote + ?Sized>(
        &mut self,
        remote: &R,
        id: &str,
        name: &str,
    ) -> Result<Applied<Project>> {
        let name = non_empty(name)?;
        let project = remote.update_project(id, &ProjectUpdate::rename(name))?;

        let warning = if self.config.context.rename_project(&project) {
            self.commit_after_remote()
        } else {
            None
        };
        Ok(Applied::new(project, warning))
    }

    /// Delete a project; if it was active, drop back to the organization.
    ///
    /// # Errors
    ///
    /// `RemoteError` if the deletion fails.
    pub fn delete_project<R: Remote + ?Sized>(
        &mut self,
        remote: &R,
        id: &str,
    ) -> Result<Applied<()>> {
        remote.delete_project(id)?;
        info!(project = %id, "deleted project");

        let warning = if self.config.context.forget_project(id) {
            self.commit_after_remote()
        } else {
            None
        };
        Ok(Applied::new((), warning))
    }

    /// Save, restoring `before` in memory if the save fails.
    fn commit(&mut self, before: Config) -> Result<()> {
        if let Err(e) = self.store.save(&self.config) {
            self.config = before;
            return Err(e);
        }
        Ok(())
    }

    /// Save after a successful remote mutation. Failure becomes a warning and
    /// the in-memory context keeps the new state.
    fn commit_after_remote(&mut self) -> Option<PersistenceWarning> {
        match self.store.save(&self.config) {
            Ok(()) => None,
            Err(e) => {
                warn!(error = %e, "context not persisted");
                Some(PersistenceWarning(Box::new(e)))
            }
        }
    }
}

fn non_empty(name: &str) -> Result<&str> {
    validation::validate_name(name)?;
    Ok(name.trim())
}

/// Find an organization by id, then by exact name.
///
/// # Errors
///
/// `NotFound` on a miss, `RemoteError` if listing fails.
pub fn resolve_organization<R: Remote + ?Sized>(remote: &R, selector: &str) -> Result<Organization> {
    let orgs = remote.list_organizations()?;
    orgs.iter()
        .find(|o| o.id == selector)
        .or_else(|| orgs.iter().find(|o| o.name == selector))
        .cloned()
        .ok_or_else(|| Error::not_found("organization", selector))
}

/// Find a project of `organization_id` by slug, then by id.
///
/// # Errors
///
/// `NotFound` on a miss, `RemoteError` if listing fails.
pub fn resolve_project<R: Remote + ?Sized>(
    remote: &R,
    organization_id: &str,
    selector: &str,
) -> Result<Project> {
    let projects = remote.list_projects(organization_id)?;
    projects
        .iter()
        .find(|p| p.slug == selector)
        .or_else(|| projects.iter().find(|p| p.id == selector))
        .cloned()
        .ok_or_else(|| Error::not_found("project", selector))
}
