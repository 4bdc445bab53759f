//! Active context.
//!
//! The locally persisted organization/project selection and its
//! transitions. Transitions here are pure; persistence is layered on top by
//! [`crate::core::context::Session`].

use serde::{Deserialize, Serialize};

use super::{Organization, Project};
use crate::core::types::{OrgId, ProjectId};
use crate::error::ContextError;

/// Which level of the hierarchy is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    NoContext,
    OrgSelected,
    ProjectSelected,
}

/// Persisted organization/project selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<OrgId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
}

/// A resolved active organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveOrganization {
    pub id: OrgId,
    pub name: String,
}

/// A resolved active project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveProject {
    pub id: ProjectId,
    pub slug: String,
    pub name: String,
    pub organization_id: OrgId,
}

impl From<&Project> for ActiveProject {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            slug: project.slug.clone(),
            name: project.name.clone(),
            organization_id: project.organization_id.clone(),
        }
    }
}

impl ActiveContext {
    pub fn state(&self) -> ContextState {
        match (&self.organization_id, &self.project_id) {
            (Some(_), Some(_)) => ContextState::ProjectSelected,
            (Some(_), None) => ContextState::OrgSelected,
            // A project without an organization cannot be trusted.
            (None, _) => ContextState::NoContext,
        }
    }

    /// Select `org`. Always drops the selected project.
    pub fn select_organization(&mut self, org: &Organization) {
        self.organization_id = Some(org.id.clone());
        self.organization_name = Some(org.name.clone());
        self.clear_project();
    }

    /// Select `project`, which must belong to the active organization.
    ///
    /// # Errors
    ///
    /// `NoActiveOrganization` with nothing selected, `Mismatch` when the
    /// project's owner differs. The context is unchanged on error.
    pub fn select_project(&mut self, project: &Project) -> Result<(), ContextError> {
        let org = self.require_active_organization()?;
        if project.organization_id != org.id {
            return Err(ContextError::Mismatch {
                project: project.slug.clone(),
                owner: project.organization_id.clone(),
                active: org.id,
            });
        }

        self.project_id = Some(project.id.clone());
        self.project_slug = Some(project.slug.clone());
        self.project_name = Some(project.name.clone());
        Ok(())
    }

    /// Refresh the cached name if `org` is the active organization.
    ///
    /// Returns whether anything changed.
    pub fn rename_organization(&mut self, org: &Organization) -> bool {
        if self.organization_id.as_deref() != Some(org.id.as_str())
            || self.organization_name.as_deref() == Some(org.name.as_str())
        {
            return false;
        }
        self.organization_name = Some(org.name.clone());
        true
    }

    /// Refresh the cached name and slug if `project` is the active project.
    ///
    /// Returns whether anything changed.
    pub fn rename_project(&mut self, project: &Project) -> bool {
        if self.project_id.as_deref() != Some(project.id.as_str()) {
            return false;
        }
        let before = self.clone();
        self.project_slug = Some(project.slug.clone());
        self.project_name = Some(project.name.clone());
        *self != before
    }

    /// Drop the project selection if `project_id` is the active project.
    ///
    /// Returns whether anything changed.
    pub fn forget_project(&mut self, project_id: &str) -> bool {
        if self.project_id.as_deref() != Some(project_id) {
            return false;
        }
        self.clear_project();
        true
    }

    /// Back to `NoContext`.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// # Errors
    ///
    /// `NoActiveOrganization` in `NoContext`.
    pub fn require_active_organization(&self) -> Result<ActiveOrganization, ContextError> {
        match &self.organization_id {
            Some(id) => Ok(ActiveOrganization {
                id: id.clone(),
                name: self.organization_name.clone().unwrap_or_else(|| id.clone()),
            }),
            None => Err(ContextError::NoActiveOrganization),
        }
    }

    /// # Errors
    ///
    /// `NoActiveProject` unless in `ProjectSelected`.
    pub fn require_active_project(&self) -> Result<ActiveProject, ContextError> {
        match (&self.organization_id, &self.project_id) {
            (Some(org), Some(id)) => Ok(ActiveProject {
                id: id.clone(),
                slug: self.project_slug.clone().unwrap_or_else(|| id.clone()),
                name: self.project_name.clone().unwrap_or_default(),
                organization_id: org.clone(),
            }),
            _ => Err(ContextError::NoActiveProject),
        }
    }

    fn clear_project(&mut self) {
        self.project_id = None;
        self.project_slug = None;
        self.project_name = None;
    }
}
