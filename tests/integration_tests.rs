//! Integration tests for the inventory console
//!
//! These tests drive the binary end-to-end by feeding scripted menu input on
//! stdin using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temp dir holding the given config file contents
fn setup_config(contents: &str) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.yaml");
    fs::write(&path, contents).unwrap();
    (tmp, path)
}

/// Helper to get an inventory command isolated from the user's config and env
fn inventory(config: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("inventory").unwrap();
    cmd.arg("--config")
        .arg(config)
        .arg("--no-color")
        .env_remove("INVENTORY_ENGINEER")
        .env_remove("INVENTORY_DATE_FORMAT")
        .env_remove("INVENTORY_COLOR")
        .env_remove("INVENTORY_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Supplier 0, part specification 0 "Bolt", supplier assigned, one request
const SCENARIO: &str = "s\nc\ny\nBolt\nM6 hex bolt\na\n0\n0\nr\n0\ny\n\n0\nEngineer Name\n0\nl\nq\n";

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    Command::cargo_bin("inventory")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("part specifications"));
}

#[test]
fn test_version_displays() {
    Command::cargo_bin("inventory")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("inventory"));
}

#[test]
fn test_unknown_flag_fails() {
    Command::cargo_bin("inventory")
        .unwrap()
        .arg("--unknown-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

// ============================================================================
// Menu Loop Tests
// ============================================================================

#[test]
fn test_quit_immediately() {
    let (_tmp, config) = setup_config("");
    inventory(&config)
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Main menu"))
        .stdout(predicate::str::contains("q) Quit"));
}

#[test]
fn test_closed_input_exits_cleanly() {
    let (_tmp, config) = setup_config("");
    inventory(&config)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter selection> "));
}

#[test]
fn test_invalid_selection_reported() {
    let (_tmp, config) = setup_config("");
    inventory(&config)
        .write_stdin("z\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid menu selection"));
}

#[test]
fn test_missing_entity_reported_and_loop_continues() {
    let (_tmp, config) = setup_config("");
    inventory(&config)
        .write_stdin("s\nc\ny\nBolt\nM6\ne\n5\ns\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: part specification 5 not found"))
        .stdout(predicate::str::contains("Created supplier 1"));
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[test]
fn test_requisition_scenario() {
    let (_tmp, config) = setup_config("");
    inventory(&config)
        .write_stdin(SCENARIO)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created supplier 0"))
        .stdout(predicate::str::contains("Created part specification 0"))
        .stdout(predicate::str::contains("Assigned supplier 0 to part specification 0"))
        .stdout(predicate::str::contains(
            "Added requisition request 0 to part specification 0",
        ))
        .stdout(predicate::str::contains("0) Bolt: M6 hex bolt"))
        .stdout(predicate::str::contains("    suppliers: 0, 0"))
        .stdout(predicate::str::contains(
            "id: 0  quantity: 0  engineer: Engineer Name",
        ));
}

#[test]
fn test_date_format_from_config() {
    let (_tmp, config) = setup_config("date_format: \"DAY %j\"\n");
    inventory(&config)
        .write_stdin(SCENARIO)
        .assert()
        .success()
        .stdout(predicate::str::contains("date: DAY "));
}

#[test]
fn test_engineer_from_config() {
    let (_tmp, config) = setup_config("engineer: Grace\n");
    inventory(&config)
        .write_stdin("s\nc\ny\nBolt\nM6\nr\n0\ny\n\n1\n\n0\nl\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("engineer: Grace"));
}

#[test]
fn test_engineer_from_env_overrides_config() {
    let (_tmp, config) = setup_config("engineer: Grace\n");
    inventory(&config)
        .env("INVENTORY_ENGINEER", "Ada")
        .write_stdin("s\nc\ny\nBolt\nM6\nr\n0\ny\n\n1\n\n0\nl\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("engineer: Ada"));
}

#[test]
fn test_invalid_date_format_from_env_is_ignored() {
    let (_tmp, config) = setup_config("");
    inventory(&config)
        .env("INVENTORY_DATE_FORMAT", "%Q")
        .write_stdin(SCENARIO)
        .assert()
        .success()
        .stdout(predicate::str::contains("engineer: Engineer Name"))
        .stderr(predicate::str::contains("ignoring invalid INVENTORY_DATE_FORMAT"));
}

// ============================================================================
// Config and Logging Tests
// ============================================================================

#[test]
fn test_invalid_config_fails() {
    let (_tmp, config) = setup_config("color: [1, 2]\n");
    inventory(&config)
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config"));
}

#[test]
fn test_invalid_date_format_in_config_fails() {
    let (_tmp, config) = setup_config("date_format: \"%Q\"\n");
    inventory(&config)
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("chrono"));
}

#[test]
fn test_missing_config_fails() {
    let tmp = TempDir::new().unwrap();
    inventory(&tmp.path().join("absent.yaml"))
        .write_stdin("q\n")
        .assert()
        .failure();
}

#[test]
fn test_verbose_logs_to_stderr() {
    let (_tmp, config) = setup_config("");
    inventory(&config)
        .arg("--verbose")
        .write_stdin("s\nq\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("created supplier"))
        .stdout(predicate::str::contains("created supplier").not());
}

#[test]
fn test_quiet_suppresses_warnings() {
    let (_tmp, config) = setup_config("");
    inventory(&config)
        .arg("--quiet")
        .write_stdin("a\ns\nc\ny\nBolt\nM6\na\n9\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: part specification 9 not found"))
        .stderr(predicate::str::is_empty());
}
