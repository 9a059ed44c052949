// Folder Creator - research group project folder trees
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::form_state::{FormField, FormState};
pub use models::identity::ValidatedIdentity;
pub use services::folder_builder::{create_all, CreationReport, FailureDecision};
pub use services::form_controller::{
    plan_creation_paths, reset_form_keeping_drive, validate, FormController, FormHost, FormPhase,
    SubmitOutcome,
};
