use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::info;

use crate::models::form_state::{FormField, FormState};
use crate::services::folder_builder::FailureDecision;
use crate::services::form_controller::{FormController, FormHost, SubmitOutcome};
use crate::utils::config::AppConfig;
use crate::utils::error::{FolderError, Result, ValidationError};

/// Fill in the folder form line by line on the terminal
#[derive(Debug, Default, Args)]
pub struct InteractiveCommand {}

impl InteractiveCommand {
    pub fn run(&self, config: &AppConfig) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_form_loop(stdin.lock(), stdout.lock(), config)
    }
}

/// Line-oriented stand-in for the desktop form.
///
/// Once the input is exhausted every question is answered "no", which
/// drives the controller toward a clean exit.
pub struct TerminalHost<R, W> {
    reader: R,
    writer: W,
    focus: FormField,
    closed: bool,
}

impl<R: BufRead, W: Write> TerminalHost<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            focus: FormField::CodeAcronym,
            closed: false,
        }
    }

    /// Input ended or output broke
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn say(&mut self, text: &str) {
        if writeln!(self.writer, "{text}").is_err() {
            self.closed = true;
        }
    }

    fn read_answer(&mut self, prompt: &str) -> Option<String> {
        if self.closed {
            return None;
        }
        if write!(self.writer, "{prompt}").and_then(|()| self.writer.flush()).is_err() {
            self.closed = true;
            return None;
        }
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => {
                self.closed = true;
                None
            }
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }

    pub fn ask_yes_no(&mut self, question: &str, default: bool) -> bool {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            let Some(answer) = self.read_answer(&format!("{question} {hint} ")) else {
                return false;
            };
            match answer.trim().to_lowercase().as_str() {
                "" => return default,
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => self.say("Please answer y or n."),
            }
        }
    }

    /// Ask the text fields, starting at the focused one. An empty answer keeps
    /// the current value.
    pub fn edit_fields(&mut self, form: &mut FormState) {
        let start = FormField::ALL.iter().position(|f| *f == self.focus).unwrap_or(0);
        for field in &FormField::ALL[start..] {
            let current = form.text(*field).to_string();
            let prompt = if current.is_empty() {
                format!("{} (e.g., {}): ", field.label(), field.example())
            } else {
                format!("{} [{current}]: ", field.label())
            };
            match self.read_answer(&prompt) {
                Some(answer) if !answer.trim().is_empty() => form.set_text(*field, answer),
                Some(_) => {}
                None => return,
            }
        }
        self.focus = FormField::CodeAcronym;
    }

    /// Walk the checkbox tree: section, then "select all", then single subfolders
    pub fn edit_selections(&mut self, form: &mut FormState) -> Result<()> {
        let names: Vec<_> = form.sections().iter().map(|s| s.section()).collect();
        for section in names {
            let include = self.ask_yes_no(&format!("Include section '{}'?", section.name), false);
            form.set_section_selected(section.name, include)?;
            if !include {
                continue;
            }
            let all = self.ask_yes_no("    Select all subfolders?", false);
            form.set_select_all(section.name, all)?;
            if all {
                continue;
            }
            for sub in section.subfolders {
                let tick = self.ask_yes_no(&format!("    {sub}?"), false);
                form.set_subfolder_selected(section.name, sub, tick)?;
            }
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> FormHost for TerminalHost<R, W> {
    fn show_validation_error(&mut self, error: &ValidationError) {
        self.say(&format!("{}: {error}", error.title()));
    }

    fn ask_keep_editing(&mut self, missing: &[FormField]) -> bool {
        let error = ValidationError::MissingField {
            fields: missing.to_vec(),
        };
        self.say(&error.to_string());
        self.ask_yes_no("Do you want to continue filling the form?", true)
    }

    fn focus_field(&mut self, field: FormField) {
        self.focus = field;
    }

    fn confirm_creation(&mut self, main_folder: &Path) -> bool {
        self.say(&format!("Create folder tree under:\n{}", main_folder.display()));
        self.ask_yes_no("Proceed?", false)
    }

    fn acknowledge_failure(&mut self, path: &Path, error: &io::Error) -> FailureDecision {
        self.say(&format!("Error creating folder:\n{}\n{error}", path.display()));
        if self.ask_yes_no("Continue?", false) {
            FailureDecision::Continue
        } else {
            FailureDecision::Abort
        }
    }

    fn show_success(&mut self, main_folder: &Path) {
        self.say(&format!("Folders created under:\n{}", main_folder.display()));
    }

    fn ask_create_another(&mut self) -> bool {
        self.ask_yes_no("Do you want to create another folder set?", false)
    }
}

/// Run form cycles until the person exits or the input ends
pub fn run_form_loop<R: BufRead, W: Write>(reader: R, writer: W, config: &AppConfig) -> Result<()> {
    let mut controller = FormController::new().with_base_dir(config.base_dir.clone());
    let mut host = TerminalHost::new(reader, writer);
    let mut needs_selection = true;

    while !controller.is_terminated() {
        host.edit_fields(controller.state_mut());
        if needs_selection {
            host.edit_selections(controller.state_mut())?;
            needs_selection = false;
        }
        if host.is_closed() {
            break;
        }

        match controller.submit(&mut host) {
            SubmitOutcome::Invalid(_) => {}
            SubmitOutcome::Declined => {
                needs_selection = host.ask_yes_no("Change the folder selection?", false);
            }
            SubmitOutcome::Completed(report) => {
                info!(
                    created = report.created.len(),
                    failed = report.failed.len(),
                    "form cycle finished"
                );
                needs_selection = true;
            }
            SubmitOutcome::Aborted { path, .. } => return Err(FolderError::Aborted { path }),
            SubmitOutcome::RootUnavailable { root } => {
                return Err(FolderError::RootNotAbsolute { root });
            }
            SubmitOutcome::Abandoned | SubmitOutcome::Closed => break,
        }
        if host.is_closed() {
            break;
        }
    }
    Ok(())
}
