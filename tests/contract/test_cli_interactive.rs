// Contract test for the interactive form on stdin

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_interactive_form_creates_main_folder() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("folder-creator").unwrap();
    cmd.arg("--base-dir")
        .arg(temp_dir.path())
        // fields, six sections declined, proceed, no further set
        .write_stdin("B-HYMO\n2019-Anna\nF\nn\nn\nn\nn\nn\nn\ny\nn\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Folders created under:"));
    assert!(temp_dir.path().join("B19-HYMO-2019-Anna").is_dir());
}

#[test]
fn test_interactive_abandoned_form_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("folder-creator").unwrap();
    cmd.arg("interactive")
        .arg("--base-dir")
        .arg(temp_dir.path())
        .write_stdin("\n\n\nn\nn\nn\nn\nn\nn\nn\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("The following required fields are empty"));
}
