use clap::Args;

use crate::models::form_state::{FormField, FormState};
use crate::utils::error::{FolderError, Result};

/// Form values given as flags instead of typed into the form
#[derive(Debug, Clone, Default, Args)]
pub struct FormArgs {
    /// Code and project acronym, e.g. A-CABCAR
    #[arg(long, value_name = "CODE-ACRONYM")]
    pub code_acronym: Option<String>,

    /// Start year and person, e.g. 2026-Peter
    #[arg(long, value_name = "YEAR-PERSON")]
    pub year_person: Option<String>,

    /// Drive letter, e.g. D
    #[arg(long, value_name = "LETTER")]
    pub drive: Option<String>,

    /// Tick a section (repeatable)
    #[arg(long = "section", value_name = "SECTION")]
    pub sections: Vec<String>,

    /// Tick a subfolder and its section (repeatable)
    #[arg(long = "subfolder", value_name = "SECTION/SUBFOLDER")]
    pub subfolders: Vec<String>,

    /// Tick a section and all of its subfolders (repeatable)
    #[arg(long = "all", value_name = "SECTION")]
    pub select_all: Vec<String>,
}

impl FormArgs {
    /// Apply the flags to a fresh form, the same way clicks would
    pub fn to_form_state(&self) -> Result<FormState> {
        let mut form = FormState::new();
        let texts = [
            (FormField::CodeAcronym, &self.code_acronym),
            (FormField::YearPerson, &self.year_person),
            (FormField::Drive, &self.drive),
        ];
        for (field, value) in texts {
            if let Some(value) = value {
                form.set_text(field, value.as_str());
            }
        }

        for section in &self.sections {
            form.set_section_selected(section, true)?;
        }
        for selector in &self.subfolders {
            let (section, subfolder) = parse_selector(selector)?;
            form.set_section_selected(section, true)?;
            form.set_subfolder_selected(section, subfolder, true)?;
        }
        for section in &self.select_all {
            form.set_section_selected(section, true)?;
            form.set_select_all(section, true)?;
        }

        Ok(form)
    }
}

/// `"Outcome/Reports"` -> `("Outcome", "Reports")`
fn parse_selector(selector: &str) -> Result<(&str, &str)> {
    selector
        .split_once('/')
        .map(|(section, subfolder)| (section.trim(), subfolder.trim()))
        .filter(|(section, subfolder)| !section.is_empty() && !subfolder.is_empty())
        .ok_or_else(|| FolderError::InvalidSelector(selector.to_string()))
}
