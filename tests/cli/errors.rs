//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pull"))
        .stdout(predicate::str::contains("push"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("windkeep"));
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).contains("_windkeep"));
}

#[test]
fn test_completions_zsh_names_binary() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "zsh"]).output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).starts_with("#compdef windkeep"));
}

#[test]
fn test_completions_other_shells() {
    let t = Test::new();

    for shell in ["zsh", "fish", "power-shell"] {
        let output = t.cmd().args(["completions", shell]).output().unwrap();
        assert_success(&output);
        assert!(!stdout(&output).is_empty(), "{} completions empty", shell);
    }
}

#[test]
fn test_invalid_environment_rejected() {
    let t = Test::with_project();

    t.cmd()
        .args(["pull", "--env", "qa"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid environment 'qa'"));
}

#[test]
fn test_run_requires_command() {
    let t = Test::with_project();

    t.cmd().arg("run").assert().failure();
}

#[test]
fn test_unreachable_remote_is_one_line_error() {
    let t = Test::with_project();

    let output = t.cmd().args(["pull", "-"]).output().unwrap();

    assert_fails_with(&output, "request failed");
    assert!(stdout(&output).is_empty());
    assert!(!stderr(&output).contains("panicked"));
}

#[test]
fn test_malformed_config_reported() {
    let t = Test::new();
    t.write_config("api_token = [not toml");

    t.cmd()
        .arg("whoami")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}
