// Common error types for the folder creator

use std::path::PathBuf;

use crate::models::form_state::FormField;

/// Reasons a submitted form is rejected. Always recoverable: the host
/// re-prompts the same form and focuses [`ValidationError::field`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("The following required fields are empty:\n - {}", join_labels(fields))]
    MissingField { fields: Vec<FormField> },

    #[error("Name must be: Code-Acronym (e.g., A-CABCAR)")]
    InvalidCodeAcronym,

    #[error("Start Year & Person must look like: 2025-Thomas")]
    InvalidYearPerson,

    #[error("Drive must be ONE letter (A-Z), e.g., F")]
    InvalidDrive,
}

impl ValidationError {
    /// The field the host should focus after showing this error.
    /// For missing fields this is the first empty one in form order.
    pub fn field(&self) -> FormField {
        match self {
            Self::MissingField { fields } => {
                fields.first().copied().unwrap_or(FormField::CodeAcronym)
            }
            Self::InvalidCodeAcronym => FormField::CodeAcronym,
            Self::InvalidYearPerson => FormField::YearPerson,
            Self::InvalidDrive => FormField::Drive,
        }
    }

    /// Short dialog title, one per error kind
    pub fn title(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "Incomplete form",
            Self::InvalidCodeAcronym => "Invalid Name",
            Self::InvalidYearPerson => "Invalid format",
            Self::InvalidDrive => "Invalid Drive",
        }
    }
}

fn join_labels(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join("\n - ")
}

#[derive(Debug, thiserror::Error)]
pub enum FolderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Unknown section '{0}'")]
    UnknownSection(String),

    #[error("Unknown subfolder '{subfolder}' in section '{section}'")]
    UnknownSubfolder { section: String, subfolder: String },

    #[error("Invalid subfolder selector '{0}' (expected \"SECTION/SUBFOLDER\")")]
    InvalidSelector(String),

    #[error("Subfolders of '{0}' can only be changed while the section is ticked")]
    SubfoldersDisabled(String),

    #[error(
        "Cannot create folders under '{}': not an absolute path on this system. \
         Pass --base-dir or set FOLDER_CREATOR_BASE_DIR",
        root.display()
    )]
    RootNotAbsolute { root: PathBuf },

    #[error("Folder creation aborted at {}", path.display())]
    Aborted { path: PathBuf },

    #[error("{failed} folder(s) could not be created")]
    CreationFailed { failed: usize },

    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FolderError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ValidationError(_)
            | Self::UnknownSection(_)
            | Self::UnknownSubfolder { .. }
            | Self::InvalidSelector(_)
            | Self::SubfoldersDisabled(_)
            | Self::RootNotAbsolute { .. } => 2,
            Self::IoError(_)
            | Self::Aborted { .. }
            | Self::CreationFailed { .. }
            | Self::Serialization(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, FolderError>;

/// Error as presented to the person at the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_folder_error(err: &FolderError) -> Self {
        Self {
            message: err.to_string(),
            exit_code: err.exit_code(),
        }
    }

    pub fn print(&self) {
        eprintln!("Error: {}", self.message);
    }
}
