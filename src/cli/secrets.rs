//! Secret commands (list, get, set, delete).

use std::io::{self, BufRead, IsTerminal};

use dialoguer::Password;
use serde_json::json;
use zeroize::Zeroizing;

use crate::cli::{output, pick, Globals, Target};
use crate::core::domain::Environment;
use crate::core::secrets::{self, Written};
use crate::error::Result;

/// List secret keys with the environments each is set in.
pub fn list(
    globals: &Globals,
    environment: Option<Environment>,
    project: Option<&str>,
    json: bool,
) -> Result<()> {
    let session = globals.session()?;
    let remote = globals.remote(session.config())?;
    let target = session.target_project(&remote, project)?;

    let all = secrets::list(&remote, &target)?;
    let shown: Vec<_> = all
        .iter()
        .filter(|s| environment.map_or(true, |env| s.value_for(env).is_some()))
        .collect();

    if json {
        let entries: Vec<_> = shown
            .iter()
            .map(|s| {
                json!({
                    "key": s.key,
                    "description": s.description,
                    "environments": s.environments(),
                    "updatedAt": s.updated_at,
                })
            })
            .collect();
        let result = json!({
            "project": target.slug,
            "secrets": entries,
            "count": shown.len(),
        });
        output::data(&serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if shown.is_empty() {
        match environment {
            Some(env) => output::dimmed(&format!("no secrets in {} for {}", env, target.slug)),
            None => output::dimmed(&format!("no secrets in {}", target.slug)),
        }
        return Ok(());
    }

    output::header(&format!(
        "{} secrets in {}",
        output::count(shown.len()),
        target.slug
    ));
    output::rule();
    for secret in shown {
        let environments: Vec<&str> = secret.environments().iter().map(|e| e.as_str()).collect();
        output::kv(&output::key(&secret.key), environments.join(", "));
    }

    Ok(())
}

/// Print one secret value to stdout.
pub fn get(globals: &Globals, key: &str, target: &Target) -> Result<()> {
    let session = globals.session()?;
    let remote = globals.remote(session.config())?;
    let project = session.target_project(&remote, target.project.as_deref())?;
    let environment = session.config().environment(target.env);

    let value = Zeroizing::new(secrets::get(&remote, &project, environment, key)?);
    output::data(&value);
    Ok(())
}

/// Set a secret value, reading it from stdin or a hidden prompt when omitted.
pub fn set(
    globals: &Globals,
    key: &str,
    value: Option<String>,
    description: Option<String>,
    target: &Target,
) -> Result<()> {
    let session = globals.session()?;
    let remote = globals.remote(session.config())?;
    let project = session.target_project(&remote, target.project.as_deref())?;
    let environment = session.config().environment(target.env);

    let value = match value {
        Some(value) => Zeroizing::new(value),
        None => read_value(key)?,
    };

    let written = secrets::set(
        &remote,
        &project,
        environment,
        key,
        &value,
        description,
    )?;

    let verb = match written {
        Written::Created => "added",
        Written::Updated => "updated",
    };
    output::success(&format!(
        "{} {} in {} ({})",
        verb,
        output::key(key),
        project.slug,
        environment
    ));
    Ok(())
}

/// Delete a secret after confirmation.
pub fn delete(globals: &Globals, key: &str, project: Option<&str>, yes: bool) -> Result<()> {
    let session = globals.session()?;
    let remote = globals.remote(session.config())?;
    let target = session.target_project(&remote, project)?;

    if !yes && !pick::confirm(&format!("Delete {} from every environment?", key))? {
        output::dimmed("cancelled");
        return Ok(());
    }

    secrets::delete(&remote, &target, key)?;
    output::success(&format!("deleted {} from {}", output::key(key), target.slug));
    Ok(())
}

/// Read a value from piped stdin, or prompt with hidden input.
fn read_value(key: &str) -> Result<Zeroizing<String>> {
    if !io::stdin().is_terminal() {
        let mut input = Zeroizing::new(String::new());
        io::stdin().lock().read_line(&mut input)?;
        return Ok(Zeroizing::new(
            input.trim_end_matches(['\r', '\n']).to_string(),
        ));
    }

    Ok(Zeroizing::new(
        Password::new()
            .with_prompt(format!("Value for {}", output::key(key)))
            .interact()?,
    ))
}
