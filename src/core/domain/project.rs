//! Project type and request payloads.

use serde::{Deserialize, Serialize};

use crate::core::slug::slugify;
use crate::core::types::{OrgId, ProjectId};

/// A project inside exactly one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "orgId")]
    pub organization_id: OrgId,
}

impl std::fmt::Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.slug)
    }
}

/// Payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "orgId")]
    pub organization_id: OrgId,
}

impl NewProject {
    /// Build a create request, deriving the slug from the name.
    pub fn new(name: &str, organization_id: impl Into<OrgId>) -> Self {
        let name = name.trim().to_string();
        Self {
            slug: slugify(&name),
            name,
            description: None,
            organization_id: organization_id.into(),
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}

/// Partial update of a project. Renaming also re-derives the slug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProjectUpdate {
    pub fn rename(name: &str) -> Self {
        let name = name.trim().to_string();
        Self {
            slug: Some(slugify(&name)),
            name: Some(name),
            description: None,
        }
    }
}
