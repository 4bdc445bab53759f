//! Tests for pull, push, run and secrets preconditions.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_pull_without_project() {
    let t = Test::with_org();

    t.cmd()
        .arg("pull")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no active project"));

    assert!(!t.dir.path().join(".env").exists());
}

#[test]
fn test_push_without_project() {
    let t = Test::logged_in();
    std::fs::write(t.dir.path().join(".env"), "A=1\n").unwrap();

    t.cmd()
        .arg("push")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no active project"));
}

#[test]
fn test_run_without_project_never_starts_child() {
    let t = Test::with_org();
    let marker = t.dir.path().join("ran");

    t.cmd()
        .args(["run", "--", "touch"])
        .arg(&marker)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no active project"));

    assert!(!marker.exists());
}

#[test]
fn test_run_with_unreachable_remote_never_starts_child() {
    let t = Test::with_project();
    let marker = t.dir.path().join("ran");

    t.cmd()
        .args(["run", "--env", "prod", "--", "touch"])
        .arg(&marker)
        .assert()
        .failure();

    assert!(!marker.exists());
}

#[test]
fn test_project_override_needs_organization() {
    let t = Test::logged_in();

    t.cmd()
        .args(["pull", "-", "--project", "api"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no active organization"));
}

#[test]
fn test_pull_failure_keeps_existing_file() {
    let t = Test::with_project();
    let path = t.dir.path().join(".env");
    std::fs::write(&path, "KEEP=me\n").unwrap();

    t.cmd().arg("pull").assert().failure();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "KEEP=me\n");
}

#[test]
fn test_push_missing_file() {
    let t = Test::with_project();

    t.cmd()
        .args(["push", "missing.env"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn test_secrets_set_requires_project() {
    let t = Test::with_org();

    t.cmd()
        .args(["secrets", "set", "API_KEY", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no active project"));
}
