//! Integration tests for the callcenter-ticket binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn desk() -> Command {
    let mut cmd = Command::cargo_bin("callcenter-ticket").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("CALLCENTER_CONFIG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_help_lists_flags() {
    desk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_full_session_over_stdin() {
    let temp_dir = TempDir::new().unwrap();
    let script = "1\nAlice\nalice@example.com\nNetwork\nRouter down\n\
                  1\nBob\n555-0100\nBilling\nDouble charge\n\
                  6\n\nbilling\n\n\n\
                  5\n1\n\
                  3\n1\n\
                  2\n7\n";

    desk()
        .current_dir(&temp_dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ticket created successfully! ID: 2"))
        .stdout(predicate::str::contains("Found 1 ticket(s)"))
        .stdout(predicate::str::contains("Ticket deleted successfully!"))
        .stdout(predicate::str::contains("Ticket not found!"))
        .stdout(predicate::str::contains("Exiting system..."));
}

#[test]
fn test_json_output_from_environment() {
    let temp_dir = TempDir::new().unwrap();

    desk()
        .current_dir(&temp_dir)
        .env("CALLCENTER_UI__JSON", "true")
        .write_stdin("1\nAlice\na@x\nNetwork\nDown\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\":1"))
        .stdout(predicate::str::contains("Main Menu").not());
}

#[test]
fn test_banner_from_config_file_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("callcenter.toml"),
        "[ui]\nbanner = \"Acme Support Desk\"\n",
    )
    .unwrap();

    desk()
        .current_dir(&temp_dir)
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Acme Support Desk"));
}

#[test]
fn test_missing_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    desk()
        .current_dir(&temp_dir)
        .arg("--config")
        .arg("nope.toml")
        .write_stdin("7\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read configuration"))
        .stderr(predicate::str::contains("Run with --config <path>"));
}
