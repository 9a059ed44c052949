use serde::Serialize;
use std::fmt;

use crate::models::taxonomy::{self, Section};
use crate::utils::error::{FolderError, Result};

/// The three free-text fields of the form, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FormField {
    CodeAcronym,
    YearPerson,
    Drive,
}

impl FormField {
    pub const ALL: [Self; 3] = [Self::CodeAcronym, Self::YearPerson, Self::Drive];

    pub fn label(self) -> &'static str {
        match self {
            Self::CodeAcronym => "Code & Project Acronym",
            Self::YearPerson => "Start Year & Person",
            Self::Drive => "Drive/Path",
        }
    }

    /// Example input shown next to the field
    pub fn example(self) -> &'static str {
        match self {
            Self::CodeAcronym => "A-CABCAR",
            Self::YearPerson => "2025-Thomas",
            Self::Drive => "D",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Checkbox state for one section and its subfolders.
///
/// "Select all" is not stored: it is always the conjunction of the
/// subfolder flags, so it can never drift out of sync with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSelection {
    section: &'static Section,
    selected: bool,
    subfolders: Vec<bool>,
}

impl SectionSelection {
    fn new(section: &'static Section) -> Self {
        Self {
            section,
            selected: false,
            subfolders: vec![false; section.subfolders.len()],
        }
    }

    pub fn section(&self) -> &'static Section {
        self.section
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Subfolder boxes (and "select all") are only actionable while the
    /// section itself is ticked. Their values survive deselection.
    pub fn subfolders_enabled(&self) -> bool {
        self.selected
    }

    pub fn is_subfolder_selected(&self, index: usize) -> bool {
        self.subfolders.get(index).copied().unwrap_or(false)
    }

    pub fn select_all(&self) -> bool {
        self.subfolders.iter().all(|on| *on)
    }

    /// Ticked subfolder labels in taxonomy order, regardless of the section flag
    pub fn ticked_subfolders(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.section
            .subfolders
            .iter()
            .zip(&self.subfolders)
            .filter(|(_, on)| **on)
            .map(|(name, _)| *name)
    }

    fn set_all(&mut self, value: bool) {
        self.subfolders.iter_mut().for_each(|on| *on = value);
    }

    fn clear(&mut self) {
        self.selected = false;
        self.set_all(false);
    }
}

/// Everything the person has typed and ticked in the current form cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub code_acronym_text: String,
    pub year_person_text: String,
    pub drive_text: String,
    sections: Vec<SectionSelection>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// An empty form with one unticked entry per taxonomy section
    pub fn new() -> Self {
        Self {
            code_acronym_text: String::new(),
            year_person_text: String::new(),
            drive_text: String::new(),
            sections: taxonomy::sections().iter().map(SectionSelection::new).collect(),
        }
    }

    pub fn text(&self, field: FormField) -> &str {
        match field {
            FormField::CodeAcronym => &self.code_acronym_text,
            FormField::YearPerson => &self.year_person_text,
            FormField::Drive => &self.drive_text,
        }
    }

    pub fn set_text(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::CodeAcronym => self.code_acronym_text = value,
            FormField::YearPerson => self.year_person_text = value,
            FormField::Drive => self.drive_text = value,
        }
    }

    /// Fields that are empty after trimming, in form order
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| self.text(*field).trim().is_empty())
            .collect()
    }

    pub fn sections(&self) -> &[SectionSelection] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Result<&SectionSelection> {
        self.sections
            .iter()
            .find(|s| s.section.name == name)
            .ok_or_else(|| FolderError::UnknownSection(name.to_string()))
    }

    fn section_mut(&mut self, name: &str) -> Result<&mut SectionSelection> {
        self.sections
            .iter_mut()
            .find(|s| s.section.name == name)
            .ok_or_else(|| FolderError::UnknownSection(name.to_string()))
    }

    /// Same as `section_mut`, but only while the section is ticked
    fn enabled_section_mut(&mut self, name: &str) -> Result<&mut SectionSelection> {
        let entry = self.section_mut(name)?;
        if !entry.subfolders_enabled() {
            return Err(FolderError::SubfoldersDisabled(name.to_string()));
        }
        Ok(entry)
    }

    pub fn set_section_selected(&mut self, name: &str, selected: bool) -> Result<()> {
        self.section_mut(name)?.selected = selected;
        Ok(())
    }

    /// Toggle one subfolder box. The section's "select all" follows automatically.
    /// Fails while the section is unticked.
    pub fn set_subfolder_selected(
        &mut self,
        section: &str,
        subfolder: &str,
        selected: bool,
    ) -> Result<()> {
        let entry = self.enabled_section_mut(section)?;
        let index = entry
            .section
            .subfolder_index(subfolder)
            .ok_or_else(|| FolderError::UnknownSubfolder {
                section: section.to_string(),
                subfolder: subfolder.to_string(),
            })?;
        entry.subfolders[index] = selected;
        Ok(())
    }

    pub fn is_subfolder_selected(&self, section: &str, subfolder: &str) -> Result<bool> {
        let entry = self.section(section)?;
        entry
            .section
            .subfolder_index(subfolder)
            .map(|index| entry.subfolders[index])
            .ok_or_else(|| FolderError::UnknownSubfolder {
                section: section.to_string(),
                subfolder: subfolder.to_string(),
            })
    }

    /// Bulk write of every subfolder flag in a section. Fails while the
    /// section is unticked.
    pub fn set_select_all(&mut self, section: &str, selected: bool) -> Result<()> {
        self.enabled_section_mut(section)?.set_all(selected);
        Ok(())
    }

    pub fn select_all(&self, section: &str) -> Result<bool> {
        Ok(self.section(section)?.select_all())
    }

    /// Untick every section and subfolder box
    pub fn clear_selections(&mut self) {
        self.sections.iter_mut().for_each(SectionSelection::clear);
    }
}
