//! Tests for login, logout and whoami.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_whoami_requires_login() {
    let t = Test::new();

    t.cmd()
        .arg("whoami")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not logged in"))
        .stderr(predicate::str::contains("windkeep login"));
}

#[test]
fn test_login_with_unreachable_api_stores_nothing() {
    let t = Test::new();

    t.cmd()
        .args(["login", "tok_abc", "--api-url", UNREACHABLE_API])
        .assert()
        .failure()
        .stderr(predicate::str::contains("request failed"));

    assert!(t.read_config().is_none());
}

#[test]
fn test_login_empty_piped_token_cancels() {
    let t = Test::new();

    t.cmd()
        .arg("login")
        .write_stdin("\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("login cancelled"));

    assert!(t.read_config().is_none());
}

#[test]
fn test_logout_removes_config() {
    let t = Test::with_project();
    assert!(t.config_path().exists());

    t.cmd()
        .arg("logout")
        .assert()
        .success()
        .stderr(predicate::str::contains("logged out"));

    assert!(!t.config_path().exists());
}

#[test]
fn test_logout_without_config_succeeds() {
    let t = Test::new();

    t.cmd().arg("logout").assert().success();
}

#[test]
fn test_token_env_counts_as_login() {
    let t = Test::new();

    // Authenticated via the environment, so the failure is the missing
    // context rather than the missing token.
    t.cmd()
        .env("WINDKEEP_TOKEN", "tok_env")
        .args(["pull", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no active project"));
}
