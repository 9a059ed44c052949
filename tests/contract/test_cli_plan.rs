// Contract test for `folder-creator plan`

use assert_cmd::Command;
use predicates::prelude::*;

fn plan() -> Command {
    let mut cmd = Command::cargo_bin("folder-creator").unwrap();
    cmd.env_remove("FOLDER_CREATOR_BASE_DIR").arg("plan");
    cmd
}

#[test]
fn test_plan_prints_paths_in_creation_order() {
    let mut cmd = plan();
    cmd.args([
        "--code-acronym", "A-CABCAR",
        "--year-person", "2026-Peter",
        "--drive", "D",
        "--subfolder", "Outcome/Reports",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Main folder: D:/A26-CABCAR-2026-Peter"))
        .stdout(predicate::str::contains("  D:/A26-CABCAR-2026-Peter/A26-CABCAR Outcome\n"))
        .stdout(predicate::str::contains(
            "  D:/A26-CABCAR-2026-Peter/A26-CABCAR Outcome/A26-CABCAR Reports",
        ));
}

#[test]
fn test_plan_json_lists_extra_children() {
    let mut cmd = plan();
    cmd.args([
        "--code-acronym", "a-CABCAR",
        "--year-person", "2026-Peter",
        "--drive", "d",
        "--subfolder", "Field Measurements/Hydrology",
        "--json",
    ]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let paths: Vec<&str> = value["paths"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.as_str().unwrap())
        .collect();

    assert_eq!(value["main_folder"], "D:/A26-CABCAR-2026-Peter");
    assert_eq!(paths.len(), 5);
    assert!(paths[3].ends_with("A26-CABCAR Hydrology/A26-CABCAR Hydrology Manual"));
    assert!(paths[4].ends_with("A26-CABCAR Hydrology/A26-CABCAR Hydrology Instrument"));
}

#[test]
fn test_plan_rejects_bad_code_acronym() {
    let mut cmd = plan();
    cmd.args(["--code-acronym", "12-Foo", "--year-person", "2026-Peter", "--drive", "D"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Name must be: Code-Acronym"));
}

#[test]
fn test_plan_reports_missing_fields() {
    let mut cmd = plan();
    cmd.args(["--code-acronym", "A-CABCAR"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Start Year & Person"))
        .stderr(predicate::str::contains("Drive/Path"));
}

#[test]
fn test_plan_rejects_unknown_section() {
    let mut cmd = plan();
    cmd.args([
        "--code-acronym", "A-CABCAR",
        "--year-person", "2026-Peter",
        "--drive", "D",
        "--section", "Kitchen",
    ]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown section 'Kitchen'"));
}
