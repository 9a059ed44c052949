use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::models::form_state::{FormField, FormState};
use crate::models::identity::ValidatedIdentity;
use crate::models::taxonomy;
use crate::services::folder_builder::{self, CreationReport, FailureDecision};
use crate::utils::error::ValidationError;
use crate::utils::validation;

/// The prompts and messages a UI host must provide to drive a form cycle.
///
/// Hosts own the presentation; the controller decides what is asked and when.
pub trait FormHost {
    /// A field failed its grammar. The host re-shows the form.
    fn show_validation_error(&mut self, error: &ValidationError);

    /// Some required fields are empty. `true` keeps editing, `false` closes the form.
    fn ask_keep_editing(&mut self, missing: &[FormField]) -> bool;

    /// Move input focus to the given field
    fn focus_field(&mut self, _field: FormField) {}

    /// Last chance to back out before anything touches the disk
    fn confirm_creation(&mut self, main_folder: &Path) -> bool;

    fn acknowledge_failure(&mut self, path: &Path, error: &io::Error) -> FailureDecision;

    fn show_success(&mut self, main_folder: &Path);

    /// `true` starts a fresh cycle (drive kept), `false` closes the form
    fn ask_create_another(&mut self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Creating,
    Completed,
    Terminated,
}

/// How a single press of "Create Folders" ended
#[derive(Debug)]
pub enum SubmitOutcome {
    /// A field was rejected; the form is unchanged
    Invalid(ValidationError),
    /// Required fields were empty and the person chose to stop
    Abandoned,
    /// The confirmation prompt was declined
    Declined,
    /// The tree root is not an absolute path here (a drive letter on a host
    /// without drives); nothing was asked or created
    RootUnavailable { root: PathBuf },
    /// A folder could not be created and the person chose to stop
    Aborted { path: PathBuf, report: CreationReport },
    /// Every planned path was attempted
    Completed(CreationReport),
    /// The form was already closed
    Closed,
}

/// Check the three text fields and derive the identity used for naming
pub fn validate(form: &FormState) -> Result<ValidatedIdentity, ValidationError> {
    let missing = form.missing_fields();
    if !missing.is_empty() {
        return Err(ValidationError::MissingField { fields: missing });
    }

    let (code, acronym) = validation::parse_code_acronym(form.code_acronym_text.trim())
        .ok_or(ValidationError::InvalidCodeAcronym)?;
    let (year, person) = validation::parse_year_person(form.year_person_text.trim())
        .ok_or(ValidationError::InvalidYearPerson)?;
    let drive =
        validation::parse_drive(form.drive_text.trim()).ok_or(ValidationError::InvalidDrive)?;

    Ok(ValidatedIdentity::new(code, acronym, year, person, drive))
}

/// Every directory to create, in taxonomy order: the main folder, then per
/// ticked section its folder, each ticked subfolder and that subfolder's
/// extra children. Subfolder ticks of unticked sections are ignored.
pub fn plan_creation_paths(identity: &ValidatedIdentity, form: &FormState) -> Vec<PathBuf> {
    let main_folder = identity.main_folder_path();
    let mut paths = vec![main_folder.clone()];

    debug!(path = %main_folder.display(), "planned");

    for selection in form.sections().iter().filter(|s| s.is_selected()) {
        let section = selection.section();
        let section_path = main_folder.join(identity.section_folder_name(section.name));
        debug!(path = %section_path.display(), "planned");
        paths.push(section_path.clone());

        for subfolder in selection.ticked_subfolders() {
            let sub_path = section_path.join(identity.subfolder_name(subfolder));
            debug!(path = %sub_path.display(), "planned");
            paths.push(sub_path.clone());
            for child in taxonomy::extra_children(section.name, subfolder) {
                let child_path = sub_path.join(identity.subfolder_name(child));
                debug!(path = %child_path.display(), "planned");
                paths.push(child_path);
            }
        }
    }

    paths
}

/// Clear identity fields and every checkbox; the drive entry is kept
pub fn reset_form_keeping_drive(form: FormState) -> FormState {
    let mut fresh = FormState::new();
    fresh.drive_text = form.drive_text;
    fresh
}

/// Owns the live form and walks it through one or more creation cycles
#[derive(Debug)]
pub struct FormController {
    state: FormState,
    phase: FormPhase,
    base_dir: Option<PathBuf>,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self {
            state: FormState::new(),
            phase: FormPhase::Editing,
            base_dir: None,
        }
    }

    /// Create folder trees under `base_dir` instead of the drive root
    pub fn with_base_dir(mut self, base_dir: Option<PathBuf>) -> Self {
        self.base_dir = base_dir;
        self
    }

    pub fn with_state(mut self, state: FormState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == FormPhase::Terminated
    }

    /// Validated identity with the configured base directory applied
    pub fn identity(&self) -> Result<ValidatedIdentity, ValidationError> {
        let identity = validate(&self.state)?;
        Ok(match &self.base_dir {
            Some(dir) => identity.with_root(dir.clone()),
            None => identity,
        })
    }

    pub fn plan(&self) -> Result<Vec<PathBuf>, ValidationError> {
        Ok(plan_creation_paths(&self.identity()?, &self.state))
    }

    /// Handle the "Create Folders" action end to end
    pub fn submit(&mut self, host: &mut dyn FormHost) -> SubmitOutcome {
        if self.phase != FormPhase::Editing {
            return SubmitOutcome::Closed;
        }

        let identity = match self.identity() {
            Ok(identity) => identity,
            Err(ValidationError::MissingField { fields }) => {
                debug!(?fields, "required fields empty");
                if host.ask_keep_editing(&fields) {
                    host.focus_field(fields[0]);
                    return SubmitOutcome::Invalid(ValidationError::MissingField { fields });
                }
                self.phase = FormPhase::Terminated;
                return SubmitOutcome::Abandoned;
            }
            Err(error) => {
                debug!(%error, "form rejected");
                host.show_validation_error(&error);
                host.focus_field(error.field());
                return SubmitOutcome::Invalid(error);
            }
        };

        // A bare drive root such as `D:/` is only absolute on Windows
        if !identity.root().is_absolute() {
            let root = identity.root().to_path_buf();
            debug!(root = %root.display(), "tree root is not absolute");
            return SubmitOutcome::RootUnavailable { root };
        }

        let main_folder = identity.main_folder_path();
        if !host.confirm_creation(&main_folder) {
            return SubmitOutcome::Declined;
        }

        let paths = plan_creation_paths(&identity, &self.state);
        info!(main_folder = %main_folder.display(), count = paths.len(), "creating folder tree");
        self.phase = FormPhase::Creating;

        let (outcomes, decision) = folder_builder::create_each(&paths, |path, error| {
            host.acknowledge_failure(path, error)
        });
        let report = CreationReport::from_outcomes(main_folder.clone(), &outcomes);

        if decision == FailureDecision::Abort {
            let path = outcomes
                .last()
                .map_or_else(|| main_folder.clone(), |o| o.path.clone());
            info!(path = %path.display(), "creation aborted");
            self.phase = FormPhase::Terminated;
            return SubmitOutcome::Aborted { path, report };
        }

        self.phase = FormPhase::Completed;
        host.show_success(&main_folder);

        if host.ask_create_another() {
            self.state = reset_form_keeping_drive(std::mem::take(&mut self.state));
            self.phase = FormPhase::Editing;
            host.focus_field(FormField::CodeAcronym);
        } else {
            self.phase = FormPhase::Terminated;
        }

        SubmitOutcome::Completed(report)
    }
}
