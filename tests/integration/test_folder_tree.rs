use folder_creator::models::taxonomy;
use folder_creator::{create_all, plan_creation_paths, validate, FormField, FormState};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn form(code_acronym: &str, year_person: &str) -> FormState {
    let mut form = FormState::new();
    form.set_text(FormField::CodeAcronym, code_acronym);
    form.set_text(FormField::YearPerson, year_person);
    form.set_text(FormField::Drive, "D");
    form
}

/// Every section and subfolder ticked
fn everything(mut form: FormState) -> FormState {
    for section in taxonomy::sections() {
        form.set_section_selected(section.name, true).unwrap();
        form.set_select_all(section.name, true).unwrap();
    }
    form
}

fn snapshot(root: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path.clone());
                found.push(path);
            }
        }
    }
    found.sort();
    found
}

#[test]
fn test_full_taxonomy_plan_size() {
    let form = everything(form("A-CABCAR", "2026-Peter"));
    let paths = plan_creation_paths(&validate(&form).unwrap(), &form);

    let subfolders: usize = taxonomy::sections().iter().map(|s| s.subfolders.len()).sum();
    let extras: usize = taxonomy::sections()
        .iter()
        .flat_map(|s| {
            s.subfolders
                .iter()
                .map(move |sub| taxonomy::extra_children(s.name, sub).len())
        })
        .sum();
    assert_eq!(paths.len(), 1 + taxonomy::sections().len() + subfolders + extras);
    assert_eq!(extras, 12);
}

#[test]
fn test_every_name_below_main_uses_project_prefix() {
    let form = everything(form("c-Soil Lab_2", "2031-Zoë O'Brien"));
    let identity = validate(&form).unwrap();
    let paths = plan_creation_paths(&identity, &form);

    assert_eq!(paths[0], PathBuf::from("D:/C31-Soil Lab_2-2031-Zoë O'Brien"));
    for path in &paths[1..] {
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("C31-Soil Lab_2 "), "{name}");
        assert!(!name.contains("Zoë"), "{name}");
    }
}

#[test]
fn test_plan_is_deterministic() {
    let form = everything(form("A-CABCAR", "2026-Peter"));
    let identity = validate(&form).unwrap();
    assert_eq!(plan_creation_paths(&identity, &form), plan_creation_paths(&identity, &form));
}

#[test]
fn test_create_all_twice_leaves_tree_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let form = everything(form("A-CABCAR", "2026-Peter"));
    let identity = validate(&form).unwrap().with_root(temp_dir.path());
    let paths = plan_creation_paths(&identity, &form);

    assert!(create_all(&paths).iter().all(|o| o.is_ok()));
    let first = snapshot(temp_dir.path());
    assert_eq!(first.len(), paths.len());

    assert!(create_all(&paths).iter().all(|o| o.is_ok()));
    assert_eq!(snapshot(temp_dir.path()), first);
}
