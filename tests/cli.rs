#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;

fn postfix() -> Command {
    Command::cargo_bin("postfix").unwrap()
}

#[test]
fn test_cli_evaluates_expression() {
    postfix()
        .arg("-1 8 2 / +")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expression evaluates to 3"));

    postfix()
        .arg("5 1 2 + 4 * + 3 -")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expression evaluates to 14"));
}

#[test]
fn test_cli_division_by_zero_fails_cleanly() {
    postfix()
        .arg("8 0 /")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("division by zero"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_cli_reports_inconsistent_stack() {
    postfix()
        .arg("1 2 3")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("left 3 values"));
}

#[test]
fn test_cli_reports_malformed_expression() {
    postfix()
        .arg("1 +")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("malformed expression"));

    postfix()
        .arg("1 two +")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("`two`"));
}

#[test]
fn test_cli_requires_exactly_one_argument() {
    postfix().assert().failure().code(2);
    postfix().args(["1", "2"]).assert().failure().code(2);
    postfix().args(["1 2 +", "-v"]).assert().failure().code(2);
    postfix().args(["1 2 +", "--verbose"]).assert().failure().code(2);
}

#[test]
fn test_cli_logs_each_step_under_rust_log() {
    postfix()
        .env("RUST_LOG", "debug")
        .arg("1 2 +")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expression evaluates to 3"))
        .stderr(predicate::str::contains("applied token"))
        .stderr(predicate::str::contains("expression evaluated"));
}

#[test]
fn test_cli_quiet_by_default() {
    postfix()
        .env_remove("RUST_LOG")
        .arg("1 2 +")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_cli_piped_logs_have_no_escape_codes() {
    postfix()
        .env("RUST_LOG", "debug")
        .arg("3 4 *")
        .assert()
        .success()
        .stderr(predicate::str::contains("applied token"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}
