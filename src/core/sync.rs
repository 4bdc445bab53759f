//! Pull, push and run.
//!
//! Moves one environment's secrets between the remote store and local
//! `KEY=VALUE` text or a child process environment.

use std::ffi::OsString;
use std::io::{Read, Write};

use tracing::{debug, info, warn};

use crate::core::domain::secret::find_by_key;
use crate::core::domain::{ActiveProject, Environment, PushFailure, PushReport, Secret};
use crate::core::env;
use crate::core::exec::{EnvBlock, Exec};
use crate::core::remote::Remote;
use crate::core::secrets::{self, Written};
use crate::error::Result;

/// How push treats keys that already exist remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PushMode {
    /// Create every pair; the service rejects existing keys.
    #[default]
    Create,
    /// Update existing keys, create the rest.
    Upsert,
}

/// Write one environment's secrets to `out` as `KEY=VALUE` lines.
///
/// Returns the number of pairs written. An empty projection writes nothing.
///
/// # Errors
///
/// Returns `RemoteError` if the listing fails, `Io` if writing fails.
pub fn pull<R, W>(
    remote: &R,
    project: &ActiveProject,
    environment: Environment,
    out: &mut W,
) -> Result<usize>
where
    R: Remote + ?Sized,
    W: Write + ?Sized,
{
    let pairs = secrets::values(remote, project, environment)?;

    out.write_all(env::serialize(pairs.iter().map(|(k, v)| (k, v))).as_bytes())?;
    out.flush()?;

    info!(project = %project.slug, %environment, count = pairs.len(), "pulled secrets");
    Ok(pairs.len())
}

/// Push `KEY=VALUE` text read from `source` into one environment.
///
/// Pairs are sent one at a time in source order. A rejected pair is
/// recorded in the report and does not stop the rest.
///
/// # Errors
///
/// Returns `Io` if the source cannot be read. In upsert mode, returns
/// `RemoteError` if the existing secrets cannot be listed.
pub fn push<R, S>(
    remote: &R,
    project: &ActiveProject,
    environment: Environment,
    source: &mut S,
    mode: PushMode,
) -> Result<PushReport>
where
    R: Remote + ?Sized,
    S: Read + ?Sized,
{
    let mut text = String::new();
    source.read_to_string(&mut text)?;
    let pairs = env::parse(&text);

    let mut existing = match mode {
        PushMode::Create => Vec::new(),
        PushMode::Upsert => secrets::list(remote, project)?,
    };

    let mut report = PushReport {
        attempted: pairs.len(),
        ..PushReport::default()
    };

    for (key, value) in &pairs {
        let current = find_by_key(&existing, key);

        match secrets::write(remote, project, current, environment, key, value, None) {
            Ok((written, secret)) => {
                report.succeeded += 1;
                match written {
                    Written::Created => report.created += 1,
                    Written::Updated => report.updated += 1,
                }
                // A key repeated later in the source must update, not re-create.
                if mode == PushMode::Upsert {
                    remember(&mut existing, secret);
                }
            }
            Err(e) => {
                warn!(key = %key, error = %e, "failed to push secret");
                report.failures.push(PushFailure {
                    key: key.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        project = %project.slug,
        %environment,
        succeeded = report.succeeded,
        attempted = report.attempted,
        "pushed secrets"
    );
    Ok(report)
}

fn remember(existing: &mut Vec<Secret>, secret: Secret) {
    match existing.iter_mut().find(|s| s.id == secret.id) {
        Some(slot) => *slot = secret,
        None => existing.push(secret),
    }
}

/// Build a child environment: `inherited` with `secrets` layered on top.
///
/// A secret overrides an inherited variable of the same name.
pub fn merge_environment<I>(inherited: I, secrets: &[(String, String)]) -> EnvBlock
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let mut block: EnvBlock = inherited.into_iter().collect();

    for (key, value) in secrets {
        if block
            .insert(OsString::from(key), OsString::from(value))
            .is_some()
        {
            debug!(key = %key, "secret overrides inherited variable");
        }
    }

    block
}

/// Run `command` with one environment's secrets injected.
///
/// Returns the child's exit code. Nothing is written to disk.
///
/// # Errors
///
/// Returns `RemoteError` if the secrets cannot be fetched, in which case
/// the command is never started, and `LaunchFailure` if it cannot be.
pub fn run<R, E, I>(
    remote: &R,
    project: &ActiveProject,
    environment: Environment,
    command: &str,
    args: &[String],
    inherited: I,
    exec: &E,
) -> Result<i32>
where
    R: Remote + ?Sized,
    E: Exec + ?Sized,
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let pairs = secrets::values(remote, project, environment)?;
    info!(
        project = %project.slug,
        %environment,
        count = pairs.len(),
        "injecting secrets"
    );

    let block = merge_environment(inherited, &pairs);
    let code = exec.run(command, args, &block)?;

    debug!(command, code, "child exited");
    Ok(code)
}
