// Contract test for `folder-creator create`

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn create(base: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("folder-creator").unwrap();
    cmd.arg("create").arg("--base-dir").arg(base).args([
        "--code-acronym", "A-CABCAR",
        "--year-person", "2026-Peter",
        "--drive", "D",
    ]);
    cmd
}

#[test]
fn test_create_with_yes_builds_tree() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = create(temp_dir.path());
    cmd.args(["--all", "Finance & Administration", "--yes"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Folders created under:"));

    let section = temp_dir
        .path()
        .join("A26-CABCAR-2026-Peter")
        .join("A26-CABCAR Finance & Administration");
    assert!(section.join("A26-CABCAR Purchase Orders").is_dir());
    assert!(section
        .join("A26-CABCAR Personnel-Assistants & Staff")
        .join("A26-CABCAR Personnel-Staff")
        .is_dir());
    assert_eq!(fs::read_dir(&section).unwrap().count(), 9);
}

#[test]
fn test_create_without_yes_only_shows_plan() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = create(temp_dir.path());
    cmd.args(["--section", "Geodata"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("A26-CABCAR Geodata"))
        .stdout(predicate::str::contains("Re-run with --yes"));

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_create_twice_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();
    for _ in 0..2 {
        let mut cmd = create(temp_dir.path());
        cmd.args(["--subfolder", "Outcome/Reports", "--yes"]);
        cmd.assert().success();
    }
    let outcome = temp_dir.path().join("A26-CABCAR-2026-Peter/A26-CABCAR Outcome");
    assert_eq!(fs::read_dir(outcome).unwrap().count(), 1);
}

#[test]
fn test_create_aborts_on_first_failure() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let mut cmd = create(&blocker);
    cmd.args(["--section", "Geodata", "--yes"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error creating folder:"))
        .stderr(predicate::str::contains("Folder creation aborted at"));
}

#[test]
fn test_create_keep_going_reports_json() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let mut cmd = create(&blocker);
    cmd.args(["--section", "Geodata", "--yes", "--keep-going", "--json"]);

    let assert = cmd.assert().failure().code(1);
    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["failed"].as_array().unwrap().len(), 2);
    assert!(value["created"].as_array().unwrap().is_empty());
}

#[cfg(not(windows))]
#[test]
fn test_create_without_base_dir_refuses_drive_root() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("folder-creator").unwrap();
    cmd.current_dir(temp_dir.path())
        .env_remove("FOLDER_CREATOR_BASE_DIR")
        .args([
            "create",
            "--code-acronym", "A-CABCAR",
            "--year-person", "2026-Peter",
            "--drive", "D",
            "--section", "Outcome",
            "--yes",
        ]);

    cmd.assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("Folders created under:").not())
        .stderr(predicate::str::contains("--base-dir"));

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[cfg(not(windows))]
#[test]
fn test_create_preview_without_base_dir_shows_drive_paths() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("folder-creator").unwrap();
    cmd.current_dir(temp_dir.path())
        .env_remove("FOLDER_CREATOR_BASE_DIR")
        .args([
            "create",
            "--code-acronym", "A-CABCAR",
            "--year-person", "2026-Peter",
            "--drive", "D",
        ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("D:/A26-CABCAR-2026-Peter"));
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}
