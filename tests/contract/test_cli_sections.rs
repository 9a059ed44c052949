// Contract test for `folder-creator sections`

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_sections_lists_taxonomy() {
    let mut cmd = Command::cargo_bin("folder-creator").unwrap();
    cmd.arg("sections");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Intro & Documentation"))
        .stdout(predicate::str::contains(
            "  - Contracts - Service & Transfer\n      + Contracts-Service",
        ));
}

#[test]
fn test_sections_json() {
    let mut cmd = Command::cargo_bin("folder-creator").unwrap();
    cmd.args(["sections", "--json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        [
            "Intro & Documentation",
            "Lab Measurements",
            "Field Measurements",
            "Geodata",
            "Finance & Administration",
            "Outcome"
        ]
    );
}
