//! Secret operations (list, get, set, delete).
//!
//! High-level operations on the secrets of one project, issued through a
//! [`Remote`]. Keys and values are validated before any request is made.

use tracing::debug;

use crate::core::domain::secret::{find_by_key, project_values};
use crate::core::domain::{ActiveProject, Environment, NewSecret, Secret, SecretUpdate, SecretValue};
use crate::core::remote::Remote;
use crate::core::validation;
use crate::error::{Error, Result};

/// What a write did on the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Written {
    Created,
    Updated,
}

/// List every secret of `project`, in the order the service returns them.
///
/// # Errors
///
/// Returns `RemoteError` if the listing fails.
pub fn list<R: Remote + ?Sized>(remote: &R, project: &ActiveProject) -> Result<Vec<Secret>> {
    remote.list_secrets(&project.id)
}

/// Fetch the `(key, value)` pairs of `project` for one environment.
///
/// # Errors
///
/// Returns `RemoteError` if the listing fails.
pub fn values<R: Remote + ?Sized>(
    remote: &R,
    project: &ActiveProject,
    environment: Environment,
) -> Result<Vec<(String, String)>> {
    let secrets = list(remote, project)?;
    let pairs = project_values(&secrets, environment);
    debug!(
        project = %project.slug,
        %environment,
        total = secrets.len(),
        projected = pairs.len(),
        "projected secrets"
    );
    Ok(pairs)
}

/// Get the value of `key` for `environment`.
///
/// # Errors
///
/// Returns `Error::NotFound` if the key doesn't exist or has no value for
/// `environment`.
pub fn get<R: Remote + ?Sized>(
    remote: &R,
    project: &ActiveProject,
    environment: Environment,
    key: &str,
) -> Result<String> {
    let secrets = list(remote, project)?;
    let secret = find_by_key(&secrets, key).ok_or_else(|| Error::not_found("secret", key))?;

    secret
        .value_for(environment)
        .map(str::to_string)
        .ok_or_else(|| Error::not_found("secret value", format!("{} ({})", key, environment)))
}

/// Set `key` to `value` for `environment`, creating the secret if needed.
///
/// Values for other environments are preserved on update.
///
/// # Errors
///
/// Returns `ValidationError` for a malformed key or value, `RemoteError` if
/// the service rejects the write.
pub fn set<R: Remote + ?Sized>(
    remote: &R,
    project: &ActiveProject,
    environment: Environment,
    key: &str,
    value: &str,
    description: Option<String>,
) -> Result<Written> {
    validation::validate_key(key)?;
    validation::validate_value(key, value)?;

    let secrets = list(remote, project)?;
    let (written, _) = write(
        remote,
        project,
        find_by_key(&secrets, key),
        environment,
        key,
        value,
        description,
    )?;
    Ok(written)
}

/// Create `key`, or update `existing` when it is given.
///
/// Returns the secret as the service now holds it.
pub(crate) fn write<R: Remote + ?Sized>(
    remote: &R,
    project: &ActiveProject,
    existing: Option<&Secret>,
    environment: Environment,
    key: &str,
    value: &str,
    description: Option<String>,
) -> Result<(Written, Secret)> {
    match existing {
        Some(secret) => {
            let update = SecretUpdate {
                description,
                values: secret.values_with(environment, value),
            };
            let updated = remote.update_secret(&project.id, &secret.id, &update)?;
            debug!(key, %environment, "updated secret");
            Ok((Written::Updated, updated))
        }
        None => {
            let secret = NewSecret {
                key: key.to_string(),
                description,
                project_id: project.id.clone(),
                values: vec![SecretValue::new(environment, value)],
            };
            let created = remote.create_secret(&secret)?;
            debug!(key, %environment, "created secret");
            Ok((Written::Created, created))
        }
    }
}

/// Delete the secret named `key` with all of its values.
///
/// # Errors
///
/// Returns `Error::NotFound` if the key doesn't exist.
pub fn delete<R: Remote + ?Sized>(remote: &R, project: &ActiveProject, key: &str) -> Result<()> {
    let secrets = list(remote, project)?;
    let secret = find_by_key(&secrets, key).ok_or_else(|| Error::not_found("secret", key))?;
    remote.delete_secret(&project.id, &secret.id)
}
