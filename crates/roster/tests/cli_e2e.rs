#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn roster_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("roster"));
    cmd.current_dir(dir)
        .env_remove("ROSTER_DATA_FILE")
        .env_remove("ROSTER_TIMEOUT_MS")
        .env_remove("ROSTER_LOG_JSON")
        .env_remove("RUST_LOG")
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0");
    cmd
}

fn initialized() -> TempDir {
    let temp = TempDir::new().unwrap();
    roster_cmd(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized user store"));
    temp
}

fn add(dir: &Path, args: &[&str]) {
    roster_cmd(dir)
        .arg("add")
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("User added"));
}

#[test]
fn test_list_without_store_suggests_init() {
    let temp = TempDir::new().unwrap();
    roster_cmd(temp.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("roster init"));
}

#[test]
fn test_init_then_empty_list() {
    let temp = initialized();
    assert_eq!(
        fs::read_to_string(temp.path().join("data.json")).unwrap(),
        "[]"
    );

    roster_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No users found."));

    roster_cmd(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_add_then_list() {
    let temp = initialized();
    add(temp.path(), &["alice", "alice@example.com", "--role", "admin"]);

    roster_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("alice@example.com"))
        .stdout(predicate::str::contains("admin"))
        .stdout(predicate::str::contains("active"));

    let raw = fs::read_to_string(temp.path().join("data.json")).unwrap();
    let users: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(users[0]["username"], "alice");
    assert_eq!(users[0]["role"], "admin");
    assert_eq!(users[0]["status"], "active");
}

#[test]
fn test_invalid_email_is_rejected_without_writing() {
    let temp = initialized();
    roster_cmd(temp.path())
        .args(["add", "alice", "not-an-email"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email format"));

    assert_eq!(
        fs::read_to_string(temp.path().join("data.json")).unwrap(),
        "[]"
    );
}

#[test]
fn test_delete_by_row_number() {
    let temp = initialized();
    add(temp.path(), &["alice", "alice@example.com"]);
    add(temp.path(), &["bob", "bob@example.com"]);

    // Newest first: bob is row 1.
    roster_cmd(temp.path())
        .args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User deleted: bob"));

    roster_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("bob").not());
}

#[test]
fn test_search_and_sort() {
    let temp = initialized();
    add(temp.path(), &["carol", "carol@example.com", "--role", "editor"]);
    add(temp.path(), &["alice", "alice@example.com"]);
    add(temp.path(), &["Bob", "bob@corp.io", "--status", "banned"]);

    roster_cmd(temp.path())
        .args(["list", "--search", "EXAMPLE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("carol"))
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("Bob").not());

    let output = roster_cmd(temp.path())
        .args(["list", "--sort", "desc"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = stdout
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().nth(1))
        .collect();
    assert_eq!(names, vec!["carol", "Bob", "alice"]);
}

#[test]
fn test_unknown_target() {
    let temp = initialized();
    add(temp.path(), &["alice", "alice@example.com"]);

    roster_cmd(temp.path())
        .args(["delete", "nobody", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("User not found"));

    roster_cmd(temp.path())
        .args(["delete", "7", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("User not found"));
}

#[test]
fn test_declined_prompt_keeps_user() {
    let temp = initialized();
    add(temp.path(), &["alice", "alice@example.com"]);

    roster_cmd(temp.path())
        .args(["delete", "alice"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete user \"alice\"?"))
        .stdout(predicate::str::contains("Delete cancelled."));

    roster_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"));
}

#[test]
fn test_data_flag_and_env_override() {
    let temp = TempDir::new().unwrap();
    roster_cmd(temp.path())
        .args(["init", "--data", "team.json"])
        .assert()
        .success();
    assert!(temp.path().join("team.json").exists());
    assert!(!temp.path().join("data.json").exists());

    roster_cmd(temp.path())
        .env("ROSTER_DATA_FILE", "team.json")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("team.json"))
        .stdout(predicate::str::contains("timeout_ms = 5000"));
}

#[test]
fn test_corrupt_store_reports_failure() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("data.json"), "{ nope").unwrap();

    roster_cmd(temp.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load users"));
}

#[test]
fn test_numeric_username_wins_over_row_number() {
    let temp = initialized();
    add(temp.path(), &["1", "one@example.com"]);
    add(temp.path(), &["alice", "alice@example.com"]);

    // Row 1 is alice, but a user is literally named "1".
    roster_cmd(temp.path())
        .args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User deleted: 1"));

    roster_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("alice@example.com"))
        .stdout(predicate::str::contains("one@example.com").not());
}

#[test]
fn test_unreadable_store_location_is_not_mistaken_for_missing() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("blocker"), "").unwrap();

    roster_cmd(temp.path())
        .args(["list", "--data", "blocker/data.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot access user store"))
        .stderr(predicate::str::contains("roster init").not());
}
