//! HTTP implementation of the remote store.
//!
//! JSON over HTTPS with a bearer token, one blocking request per call.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::ACCEPT;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::Remote;
use crate::core::constants;
use crate::core::domain::{
    NewProject, NewSecret, Organization, Project, ProjectUpdate, Secret, SecretUpdate, User,
};
use crate::error::{RemoteError, Result};

/// Longest raw body echoed back in an error message.
const MAX_ERROR_BODY: usize = 200;

/// Remote store over the service's HTTP API.
pub struct Http {
    client: Client,
    base_url: String,
    token: String,
}

impl std::fmt::Debug for Http {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Http")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Serialize)]
struct RenameOrganization<'a> {
    name: &'a str,
}

#[derive(Debug, Deserialize)]
struct ProjectList {
    #[serde(default)]
    projects: Vec<Project>,
}

impl Http {
    /// Build a client for `base_url` authenticated with `token`.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Transport` if the HTTP client cannot be built.
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(constants::REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("windkeep/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RemoteError::Transport)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(%method, path, "remote request");
        self.client
            .request(method, self.url(path))
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
    }

    /// Send and return the body of a successful response.
    fn send(&self, request: RequestBuilder) -> Result<String> {
        let response = request.send().map_err(RemoteError::Transport)?;
        let status = response.status();
        let body = response.text().map_err(RemoteError::Transport)?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "remote request failed");
            return Err(RemoteError::Status {
                status: status.as_u16(),
                message: error_message(&body)
                    .or_else(|| status.canonical_reason().map(str::to_string))
                    .unwrap_or_else(|| "request failed".to_string()),
            }
            .into());
        }

        Ok(body)
    }

    fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let body = self.send(request)?;
        decode(&body)
    }
}

/// Decode a JSON body.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body).map_err(|e| RemoteError::Decode(e.to_string()))?)
}

/// Extract a readable message from an error body.
///
/// Understands `{message}`, `{statusMessage}` and `{error}` payloads and
/// falls back to a truncated raw body.
fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    if let Ok(json) = serde_json::from_str::<Value>(body) {
        for field in ["message", "statusMessage", "error"] {
            if let Some(msg) = json.get(field).and_then(Value::as_str) {
                if !msg.trim().is_empty() {
                    return Some(msg.trim().to_string());
                }
            }
        }
    }

    Some(body.chars().take(MAX_ERROR_BODY).collect())
}

impl Remote for Http {
    fn current_user(&self) -> Result<User> {
        self.fetch(self.request(Method::GET, "/api/user"))
    }

    fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.fetch(self.request(Method::GET, "/api/org"))
    }

    fn get_organization(&self, id: &str) -> Result<Organization> {
        self.fetch(self.request(Method::GET, &format!("/api/org/{}", id)))
    }

    fn rename_organization(&self, id: &str, name: &str) -> Result<Organization> {
        let request = self
            .request(Method::PUT, &format!("/api/org/{}", id))
            .json(&RenameOrganization { name });
        self.fetch(request)
    }

    fn list_projects(&self, organization_id: &str) -> Result<Vec<Project>> {
        let list: ProjectList = self.fetch(self.request(Method::GET, "/api/projects"))?;
        Ok(list
            .projects
            .into_iter()
            .filter(|p| p.organization_id == organization_id)
            .collect())
    }

    fn create_project(&self, project: &NewProject) -> Result<Project> {
        self.fetch(self.request(Method::POST, "/api/projects").json(project))
    }

    fn update_project(&self, id: &str, update: &ProjectUpdate) -> Result<Project> {
        let request = self
            .request(Method::PUT, &format!("/api/projects/{}", id))
            .json(update);
        self.fetch(request)
    }

    fn delete_project(&self, id: &str) -> Result<()> {
        self.send(self.request(Method::DELETE, &format!("/api/projects/{}", id)))?;
        Ok(())
    }

    fn list_secrets(&self, project_id: &str) -> Result<Vec<Secret>> {
        self.fetch(self.request(Method::GET, &format!("/api/projects/{}/secrets", project_id)))
    }

    fn create_secret(&self, secret: &NewSecret) -> Result<Secret> {
        let request = self
            .request(
                Method::POST,
                &format!("/api/projects/{}/secrets", secret.project_id),
            )
            .json(secret);
        self.fetch(request)
    }

    fn update_secret(
        &self,
        project_id: &str,
        secret_id: &str,
        update: &SecretUpdate,
    ) -> Result<Secret> {
        let request = self
            .request(
                Method::PUT,
                &format!("/api/projects/{}/secrets/{}", project_id, secret_id),
            )
            .json(update);
        self.fetch(request)
    }

    fn delete_secret(&self, project_id: &str, secret_id: &str) -> Result<()> {
        let path = format!("/api/projects/{}/secrets/{}", project_id, secret_id);
        self.send(self.request(Method::DELETE, &path))?;
        Ok(())
    }
}
