//! Organization type.

use serde::{Deserialize, Serialize};

use crate::core::types::OrgId;

/// A member's role inside an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Owner,
    Admin,
    Member,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Owner => "owner",
            Role::Admin => "admin",
            Role::Member => "member",
        };
        f.write_str(s)
    }
}

/// An organization owning zero or more projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: OrgId,
    pub name: String,
    /// The caller's role, present on listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl Organization {
    pub fn new(id: impl Into<OrgId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: None,
        }
    }
}

impl std::fmt::Display for Organization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
