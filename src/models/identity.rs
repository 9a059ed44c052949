use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::models::taxonomy;

/// The parsed, trusted form of the three text fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedIdentity {
    /// Single uppercase letter
    pub code: String,
    pub acronym: String,
    /// Four digits
    pub year: String,
    pub person: String,
    /// Root under which the main folder is created, e.g. `D:/`
    pub drive_path_root: PathBuf,
    /// `code` followed by the last two digits of `year`, e.g. `A26`
    pub project_code: String,
}

impl ValidatedIdentity {
    pub fn new(code: &str, acronym: &str, year: &str, person: &str, drive: char) -> Self {
        let code = code.to_uppercase();
        let skip = year.chars().count().saturating_sub(2);
        let project_code = format!("{code}{}", year.chars().skip(skip).collect::<String>());
        Self {
            code,
            acronym: acronym.to_string(),
            year: year.to_string(),
            person: person.to_string(),
            drive_path_root: drive_root(drive),
            project_code,
        }
    }

    /// Place the tree under `root` instead of the drive root
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.drive_path_root = root.into();
        self
    }

    pub fn main_folder_name(&self) -> String {
        taxonomy::build_main_folder_name(
            &self.project_code,
            &self.acronym,
            &self.year,
            &self.person,
        )
    }

    pub fn main_folder_path(&self) -> PathBuf {
        self.drive_path_root.join(self.main_folder_name())
    }

    pub fn section_folder_name(&self, section: &str) -> String {
        taxonomy::build_section_folder_name(&self.project_code, &self.acronym, section)
    }

    pub fn subfolder_name(&self, subfolder: &str) -> String {
        taxonomy::build_subfolder_name(&self.project_code, &self.acronym, subfolder)
    }

    pub fn root(&self) -> &Path {
        &self.drive_path_root
    }
}

/// `D` -> `D:/`
pub fn drive_root(drive: char) -> PathBuf {
    PathBuf::from(format!("{}:/", drive.to_ascii_uppercase()))
}
