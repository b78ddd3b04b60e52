//! Black-box tests of the `roster` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn roster(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_summary_of_fresh_store() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total slots: 130"))
        .stdout(predicate::str::contains("Self travel: 5"));

    assert!(dir.path().join("roster.db").exists());
    assert!(dir.path().join("config.toml").exists());
    assert!(dir.path().join("logs").join("roster.log").exists());
}

#[test]
fn test_list_tuesday() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .args(["list", "--day", "tuesday", "--week", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("08:00 - 08:59"));
}

#[test]
fn test_file_backend() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .args(["--backend", "file", "list", "--day", "sun"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No passengers found for Sunday."));

    assert!(dir
        .path()
        .join("data")
        .join("transport_schedule_db_v3.json")
        .exists());
}

#[test]
fn test_reset_without_confirmation_is_cancelled() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .args(["admin", "reset"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset cancelled."));
}

#[test]
fn test_invalid_week_rejected() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .args(["mark", "some-id", "--week", "6", "--status", "absent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Week must be from 1 to 5"));
}
