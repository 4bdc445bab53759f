//! Secret set model.
//!
//! A read-only projection of a project's secrets. Remote mutations are
//! decided here and issued through [`crate::core::remote::Remote`].

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Environment;
use crate::core::types::{ProjectId, SecretId, SecretKey};

/// A value of a secret for one environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretValue {
    pub environment: Environment,
    pub value: String,
}

impl SecretValue {
    pub fn new(environment: Environment, value: impl Into<String>) -> Self {
        Self {
            environment,
            value: value.into(),
        }
    }
}

/// A named secret with zero or more per-environment values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Secret {
    pub id: SecretId,
    pub key: SecretKey,
    #[serde(default)]
    pub description: Option<String>,
    pub project_id: ProjectId,
    #[serde(default)]
    pub values: Vec<SecretValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Secret {
    /// Value for `environment`; the first entry wins if the service returned duplicates.
    pub fn value_for(&self, environment: Environment) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.environment == environment)
            .map(|v| v.value.as_str())
    }

    /// This secret's values with `environment` set to `value`.
    ///
    /// Other environments are kept; an existing entry for `environment` is
    /// replaced in place so at most one value per environment is sent.
    pub fn values_with(&self, environment: Environment, value: &str) -> Vec<SecretValue> {
        let mut values: Vec<SecretValue> = Vec::with_capacity(self.values.len() + 1);
        let mut replaced = false;

        for existing in &self.values {
            if existing.environment == environment {
                if !replaced {
                    values.push(SecretValue::new(environment, value));
                    replaced = true;
                }
            } else if !values.iter().any(|v| v.environment == existing.environment) {
                values.push(existing.clone());
            }
        }

        if !replaced {
            values.push(SecretValue::new(environment, value));
        }

        values
    }

    /// Environments this secret has a value for, in canonical order.
    pub fn environments(&self) -> Vec<Environment> {
        Environment::ALL
            .into_iter()
            .filter(|env| self.value_for(*env).is_some())
            .collect()
    }
}

/// Payload for creating a secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSecret {
    pub key: SecretKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub project_id: ProjectId,
    pub values: Vec<SecretValue>,
}

/// Payload for updating a secret's values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecretUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub values: Vec<SecretValue>,
}

/// Project secrets onto `(key, value)` pairs for one environment.
///
/// Follows source order. Secrets without a value for `environment` are
/// omitted; if a key repeats, its first occurrence wins.
pub fn project_values(secrets: &[Secret], environment: Environment) -> Vec<(String, String)> {
    let mut seen = HashSet::new();

    secrets
        .iter()
        .filter_map(|secret| {
            let value = secret.value_for(environment)?;
            seen.insert(secret.key.as_str())
                .then(|| (secret.key.clone(), value.to_string()))
        })
        .collect()
}

/// Exact, case-sensitive lookup; the first match wins.
pub fn find_by_key<'a>(secrets: &'a [Secret], key: &str) -> Option<&'a Secret> {
    secrets.iter().find(|s| s.key == key)
}
