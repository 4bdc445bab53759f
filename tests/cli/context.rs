//! Tests for organization and project context preconditions.
//!
//! Every case here fails before a request is made, so the unreachable API
//! URL is never contacted.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_project_list_requires_organization() {
    let t = Test::logged_in();

    t.cmd()
        .args(["project", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no active organization"))
        .stderr(predicate::str::contains("windkeep org switch"));
}

#[test]
fn test_project_switch_requires_organization() {
    let t = Test::logged_in();

    t.cmd()
        .args(["project", "switch", "api"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no active organization"));
}

#[test]
fn test_project_create_requires_organization() {
    let t = Test::logged_in();

    t.cmd()
        .args(["project", "create", "My App"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no active organization"));
}

#[test]
fn test_project_rename_requires_project() {
    let t = Test::with_org();

    t.cmd()
        .args(["project", "rename", "New Name"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no active project"))
        .stderr(predicate::str::contains("windkeep project switch"));
}

#[test]
fn test_org_rename_requires_organization() {
    let t = Test::logged_in();

    t.cmd()
        .args(["org", "rename", "Acme Inc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no active organization"));
}

#[test]
fn test_project_delete_requires_confirmation_without_terminal() {
    let t = Test::with_project();

    t.cmd()
        .args(["project", "delete"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn test_org_switch_without_selector_needs_terminal() {
    let t = Test::logged_in();

    // The picker refuses to run without a terminal, but only after listing,
    // which fails first against the unreachable API.
    t.cmd().args(["org", "switch"]).assert().failure();
}

#[test]
fn test_failed_commands_leave_context_unchanged() {
    let t = Test::with_project();
    let before = t.read_config();

    t.cmd().args(["org", "switch", "other"]).assert().failure();
    t.cmd().args(["project", "switch", "web"]).assert().failure();

    assert_eq!(t.read_config(), before);
}
