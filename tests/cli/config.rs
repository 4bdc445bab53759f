//! Tests for local config commands.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_config_show_defaults() {
    let t = Test::new();

    t.cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://windkeep.vercel.app"))
        .stdout(predicate::str::contains("not set"))
        .stdout(predicate::str::contains("DEVELOPMENT"));
}

#[test]
fn test_config_show_never_prints_token() {
    let t = Test::with_project();

    t.cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tok_test").not())
        .stdout(predicate::str::contains("Acme"))
        .stdout(predicate::str::contains("api"));
}

#[test]
fn test_set_env_accepts_alias_and_persists() {
    let t = Test::with_project();

    t.cmd()
        .args(["config", "set-env", "prod"])
        .assert()
        .success()
        .stderr(predicate::str::contains("PRODUCTION"));

    let stored = t.read_config().unwrap();
    assert!(stored.contains("default_environment = \"PRODUCTION\""));
    // Context survives the save.
    assert!(stored.contains("project_slug = \"api\""));

    t.cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PRODUCTION"));
}

#[test]
fn test_set_env_rejects_unknown() {
    let t = Test::new();

    t.cmd()
        .args(["config", "set-env", "qa"])
        .assert()
        .failure();

    assert!(t.read_config().is_none());
}

#[test]
fn test_config_flag_overrides_location() {
    let t = Test::new();
    let custom = t.dir.path().join("custom.toml");

    t.cmd()
        .arg("--config")
        .arg(&custom)
        .args(["config", "set-env", "staging"])
        .assert()
        .success();

    assert!(custom.exists());
    assert!(t.read_config().is_none());
}

#[cfg(unix)]
#[test]
fn test_saved_config_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::new();
    t.cmd().args(["config", "set-env", "dev"]).assert().success();

    let mode = std::fs::metadata(t.config_path()).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
}
