//! Test doubles for the remote store and process launcher.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::core::domain::{
    NewProject, NewSecret, Organization, Project, ProjectUpdate, Secret, SecretUpdate, User,
};
use crate::core::exec::{EnvBlock, Exec};
use crate::core::remote::Remote;
use crate::error::{Error, RemoteError, Result};

fn rejected(message: &str) -> Error {
    RemoteError::Status {
        status: 500,
        message: message.to_string(),
    }
    .into()
}

/// In-memory remote with call recording and injectable failures.
#[derive(Default)]
pub struct FakeRemote {
    pub organizations: RefCell<Vec<Organization>>,
    pub projects: RefCell<Vec<Project>>,
    pub secrets: RefCell<Vec<Secret>>,
    /// Secret keys whose create/update is rejected
    pub failing_keys: RefCell<HashSet<String>>,
    /// Reject every call
    pub offline: std::cell::Cell<bool>,
    pub calls: RefCell<Vec<String>>,
    /// Organization stamped on created projects instead of the requested one
    pub create_in: RefCell<Option<String>>,
    next_id: std::cell::Cell<usize>,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_org(self, id: &str, name: &str) -> Self {
        self.organizations
            .borrow_mut()
            .push(Organization::new(id, name));
        self
    }

    pub fn with_project(self, id: &str, slug: &str, org_id: &str) -> Self {
        self.projects.borrow_mut().push(Project {
            id: id.to_string(),
            name: slug.to_uppercase(),
            slug: slug.to_string(),
            description: None,
            organization_id: org_id.to_string(),
        });
        self
    }

    pub fn with_secret(self, secret: Secret) -> Self {
        self.secrets.borrow_mut().push(secret);
        self
    }

    pub fn fail_key(&self, key: &str) {
        self.failing_keys.borrow_mut().insert(key.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.borrow_mut().push(call);
        if self.offline.get() {
            return Err(rejected("offline"));
        }
        Ok(())
    }

    fn next_id(&self, prefix: &str) -> String {
        let n = self.next_id.get() + 1;
        self.next_id.set(n);
        format!("{}_{}", prefix, n)
    }
}

impl Remote for FakeRemote {
    fn current_user(&self) -> Result<User> {
        self.record("current_user".to_string())?;
        Ok(User {
            id: "u1".to_string(),
            name: Some("Test User".to_string()),
            email: "test@example.com".to_string(),
        })
    }

    fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.record("list_organizations".to_string())?;
        Ok(self.organizations.borrow().clone())
    }

    fn get_organization(&self, id: &str) -> Result<Organization> {
        self.record(format!("get_organization {}", id))?;
        self.organizations
            .borrow()
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| rejected("organization not found"))
    }

    fn rename_organization(&self, id: &str, name: &str) -> Result<Organization> {
        self.record(format!("rename_organization {} {}", id, name))?;
        let mut orgs = self.organizations.borrow_mut();
        let org = orgs
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| rejected("organization not found"))?;
        org.name = name.to_string();
        Ok(org.clone())
    }

    fn list_projects(&self, organization_id: &str) -> Result<Vec<Project>> {
        self.record(format!("list_projects {}", organization_id))?;
        Ok(self
            .projects
            .borrow()
            .iter()
            .filter(|p| p.organization_id == organization_id)
            .cloned()
            .collect())
    }

    fn create_project(&self, project: &NewProject) -> Result<Project> {
        self.record(format!("create_project {}", project.slug))?;
        let created = Project {
            id: self.next_id("proj"),
            name: project.name.clone(),
            slug: project.slug.clone(),
            description: project.description.clone(),
            organization_id: self
                .create_in
                .borrow()
                .clone()
                .unwrap_or_else(|| project.organization_id.clone()),
        };
        self.projects.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn update_project(&self, id: &str, update: &ProjectUpdate) -> Result<Project> {
        self.record(format!("update_project {}", id))?;
        let mut projects = self.projects.borrow_mut();
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| rejected("project not found"))?;
        if let Some(name) = &update.name {
            project.name = name.clone();
        }
        if let Some(slug) = &update.slug {
            project.slug = slug.clone();
        }
        Ok(project.clone())
    }

    fn delete_project(&self, id: &str) -> Result<()> {
        self.record(format!("delete_project {}", id))?;
        self.projects.borrow_mut().retain(|p| p.id != id);
        Ok(())
    }

    fn list_secrets(&self, project_id: &str) -> Result<Vec<Secret>> {
        self.record(format!("list_secrets {}", project_id))?;
        Ok(self
            .secrets
            .borrow()
            .iter()
            .filter(|s| s.project_id == project_id)
            .cloned()
            .collect())
    }

    fn create_secret(&self, secret: &NewSecret) -> Result<Secret> {
        self.record(format!("create_secret {}", secret.key))?;
        if self.failing_keys.borrow().contains(&secret.key) {
            return Err(rejected("create rejected"));
        }
        let created = Secret {
            id: self.next_id("sec"),
            key: secret.key.clone(),
            description: secret.description.clone(),
            project_id: secret.project_id.clone(),
            values: secret.values.clone(),
            updated_at: None,
        };
        self.secrets.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn update_secret(
        &self,
        project_id: &str,
        secret_id: &str,
        update: &SecretUpdate,
    ) -> Result<Secret> {
        self.record(format!("update_secret {} {}", project_id, secret_id))?;
        let mut secrets = self.secrets.borrow_mut();
        let secret = secrets
            .iter_mut()
            .find(|s| s.id == secret_id)
            .ok_or_else(|| rejected("secret not found"))?;
        if self.failing_keys.borrow().contains(&secret.key) {
            return Err(rejected("update rejected"));
        }
        secret.values = update.values.clone();
        if update.description.is_some() {
            secret.description = update.description.clone();
        }
        Ok(secret.clone())
    }

    fn delete_secret(&self, project_id: &str, secret_id: &str) -> Result<()> {
        self.record(format!("delete_secret {} {}", project_id, secret_id))?;
        self.secrets.borrow_mut().retain(|s| s.id != secret_id);
        Ok(())
    }
}

/// Launcher that records the invocation instead of spawning.
pub struct FakeExec {
    pub exit_code: i32,
    pub launch_fails: bool,
    pub seen: RefCell<Option<(String, Vec<String>, EnvBlock)>>,
}

impl FakeExec {
    pub fn exiting(exit_code: i32) -> Self {
        Self {
            exit_code,
            launch_fails: false,
            seen: RefCell::new(None),
        }
    }

    pub fn unlaunchable() -> Self {
        Self {
            launch_fails: true,
            ..Self::exiting(0)
        }
    }

    pub fn env_var(&self, key: &str) -> Option<String> {
        self.seen
            .borrow()
            .as_ref()
            .and_then(|(_, _, env)| env.get(std::ffi::OsStr::new(key)).cloned())
            .and_then(|v| v.into_string().ok())
    }
}

impl Exec for FakeExec {
    fn run(&self, command: &str, args: &[String], env: &EnvBlock) -> Result<i32> {
        if self.launch_fails {
            return Err(Error::LaunchFailure {
                command: command.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            });
        }
        self.seen
            .replace(Some((command.to_string(), args.to_vec(), env.clone())));
        Ok(self.exit_code)
    }
}
