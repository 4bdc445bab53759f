//! Remote secrets store.
//!
//! Request/response contract with the hosted service. Every call either
//! succeeds or fails with an opaque [`RemoteError`](crate::error::RemoteError);
//! nothing is retried.

use crate::core::domain::{
    NewProject, NewSecret, Organization, Project, ProjectUpdate, Secret, SecretUpdate, User,
};
use crate::error::Result;

mod http;

pub use http::Http;

/// Remote store trait.
pub trait Remote {
    /// The user owning the current credentials.
    fn current_user(&self) -> Result<User>;

    /// Organizations the current user belongs to.
    fn list_organizations(&self) -> Result<Vec<Organization>>;

    fn get_organization(&self, id: &str) -> Result<Organization>;

    fn rename_organization(&self, id: &str, name: &str) -> Result<Organization>;

    /// Projects of one organization visible to the current user.
    fn list_projects(&self, organization_id: &str) -> Result<Vec<Project>>;

    fn create_project(&self, project: &NewProject) -> Result<Project>;

    fn update_project(&self, id: &str, update: &ProjectUpdate) -> Result<Project>;

    fn delete_project(&self, id: &str) -> Result<()>;

    /// All secrets of a project, each with its nested values.
    fn list_secrets(&self, project_id: &str) -> Result<Vec<Secret>>;

    fn create_secret(&self, secret: &NewSecret) -> Result<Secret>;

    fn update_secret(&self, project_id: &str, secret_id: &str, update: &SecretUpdate)
        -> Result<Secret>;

    fn delete_secret(&self, project_id: &str, secret_id: &str) -> Result<()>;
}
