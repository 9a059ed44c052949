use clap::Args;
use std::io;
use std::path::Path;

use crate::cli::form_args::FormArgs;
use crate::cli::plan::render_plan;
use crate::models::form_state::FormField;
use crate::services::folder_builder::{CreationReport, FailureDecision};
use crate::services::form_controller::{FormController, FormHost, SubmitOutcome};
use crate::utils::config::AppConfig;
use crate::utils::error::{FolderError, Result, ValidationError};

/// Create the folder tree from flags, without prompting
#[derive(Debug, Args)]
pub struct CreateCommand {
    #[command(flatten)]
    pub form: FormArgs,

    /// Confirm creation of the main folder
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Keep creating the remaining folders after a failure
    #[arg(long)]
    pub keep_going: bool,

    /// Output the creation report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Answers every prompt from the command-line flags
#[derive(Debug)]
pub struct BatchHost {
    pub assume_yes: bool,
    pub keep_going: bool,
    pub quiet: bool,
}

impl FormHost for BatchHost {
    fn show_validation_error(&mut self, _error: &ValidationError) {}

    fn ask_keep_editing(&mut self, _missing: &[FormField]) -> bool {
        // Report the missing fields as an error instead of closing silently
        true
    }

    fn confirm_creation(&mut self, _main_folder: &Path) -> bool {
        self.assume_yes
    }

    fn acknowledge_failure(&mut self, path: &Path, error: &io::Error) -> FailureDecision {
        eprintln!("Error creating folder: {}\n{error}", path.display());
        if self.keep_going {
            FailureDecision::Continue
        } else {
            FailureDecision::Abort
        }
    }

    fn show_success(&mut self, main_folder: &Path) {
        if !self.quiet {
            println!("Folders created under:\n{}", main_folder.display());
        }
    }

    fn ask_create_another(&mut self) -> bool {
        false
    }
}

impl CreateCommand {
    pub fn run(&self, config: &AppConfig) -> Result<()> {
        let mut controller = FormController::new()
            .with_base_dir(config.base_dir.clone())
            .with_state(self.form.to_form_state()?);
        let mut host = BatchHost {
            assume_yes: self.yes,
            keep_going: self.keep_going,
            quiet: self.json,
        };

        match controller.submit(&mut host) {
            SubmitOutcome::Invalid(error) => Err(error.into()),
            // Without --yes nothing is created, so the drive root can still be previewed
            SubmitOutcome::RootUnavailable { .. } | SubmitOutcome::Declined if !self.yes => {
                self.print_preview(&controller)
            }
            SubmitOutcome::RootUnavailable { root } => Err(FolderError::RootNotAbsolute { root }),
            SubmitOutcome::Declined => Ok(()),
            SubmitOutcome::Aborted { path, report } => {
                self.print_report(&report)?;
                Err(FolderError::Aborted { path })
            }
            SubmitOutcome::Completed(report) => {
                self.print_report(&report)?;
                if report.is_complete() {
                    Ok(())
                } else {
                    Err(FolderError::CreationFailed {
                        failed: report.failed.len(),
                    })
                }
            }
            SubmitOutcome::Abandoned | SubmitOutcome::Closed => Ok(()),
        }
    }

    fn print_preview(&self, controller: &FormController) -> Result<()> {
        println!("{}", render_plan(&controller.plan()?, self.json)?);
        if !self.json {
            println!("\nNothing created. Re-run with --yes to create these folders.");
        }
        Ok(())
    }

    fn print_report(&self, report: &CreationReport) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(report)?);
        } else if !report.failed.is_empty() {
            println!(
                "{} of {} folders created, {} failed",
                report.created.len(),
                report.created.len() + report.failed.len(),
                report.failed.len()
            );
        }
        Ok(())
    }
}
