//! # CLI Integration Tests / CLI 集成测试
//!
//! Drives the `harness-relay` binary end-to-end: exit codes, fatal
//! diagnostics on stderr, and the ignore-and-log path on stdout.
//!
//! 端到端驱动 `harness-relay` 二进制：退出码、stderr 上的致命诊断、
//! 以及 stdout 上的忽略并记录路径。

mod common;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

/// The binary under test, pinned to the English locale so output assertions
/// hold regardless of the host environment.
fn relay_cmd() -> Command {
    let mut cmd = Command::cargo_bin("harness-relay").unwrap();
    cmd.env("LC_ALL", "en_US.UTF-8");
    cmd
}

#[test]
fn test_minimal_invocation_prints_the_resolved_plan() {
    relay_cmd()
        .arg("--json-config")
        .arg("cfg.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("Resolved Launch Plan"))
        .stdout(predicate::str::contains("JSON config: cfg.json"));
}

#[test]
fn test_missing_json_config_exits_with_code_one() {
    relay_cmd()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Missing required argument --json-config.",
        ));
}

#[test]
fn test_value_flag_at_end_of_args_exits_with_code_one() {
    relay_cmd()
        .arg("--package-filter")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "No value specified for argument \"package-filter\"",
        ));
}

#[test]
fn test_unknown_flag_is_logged_and_ignored() {
    relay_cmd()
        .arg("--json-config")
        .arg("cfg.json")
        .arg("--frobnicate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ignoring flag: \"frobnicate\""));
}

#[test]
fn test_bare_argument_is_logged_and_ignored() {
    relay_cmd()
        .arg("stray-token")
        .arg("--json-config")
        .arg("cfg.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ignoring argument: \"stray-token\""));
}

#[test]
fn test_unreadable_filter_file_exits_with_code_one() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.filter");

    relay_cmd()
        .arg("--test-launcher-filter-file")
        .arg(&missing)
        .arg("--json-config")
        .arg("cfg.json")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_filter_file_shows_up_in_the_plan() {
    let dir = tempdir().unwrap();
    let path = common::write_filter_file(&dir, "filters.txt", "foo.Bar\n-foo.Baz\n");

    relay_cmd()
        .arg("--test-launcher-filter-file")
        .arg(&path)
        .arg("--json-config")
        .arg("cfg.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("foo.Bar-foo.Baz"));
}

#[test]
fn test_unknown_runner_class_exits_with_code_one() {
    relay_cmd()
        .arg("--runner-filter")
        .arg("com.example.NoSuchRunner")
        .arg("--json-config")
        .arg("cfg.json")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Runner class not found"));
}

#[test]
fn test_list_tests_mode_is_reported_in_the_plan() {
    relay_cmd()
        .arg("--list-tests")
        .arg("--json-config")
        .arg("cfg.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("List tests only"));
}
