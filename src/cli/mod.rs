// CLI module: the terminal host for the folder form

pub mod create;
pub mod form_args;
pub mod interactive;
pub mod plan;
pub mod sections;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::config::{AppConfig, BASE_DIR_ENV};
use crate::utils::error::Result;

use self::create::CreateCommand;
use self::interactive::InteractiveCommand;
use self::plan::PlanCommand;
use self::sections::SectionsCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "folder-creator")]
#[command(about = "Create research-group project folder trees with a controlled naming convention")]
#[command(long_about = r#"Folder Creator builds the standard research-group directory tree for a
project. The main folder is named CodeYY-Acronym-YYYY-Person; every section,
subfolder and fixed sub-subfolder below it is prefixed with CodeYY-Acronym.

Without a subcommand an interactive form is started on the terminal.

Examples:
  folder-creator                                  Fill in the form interactively
  folder-creator sections                         Show the folder taxonomy
  folder-creator plan --code-acronym A-CABCAR --year-person 2026-Peter \
      --drive D --subfolder Outcome/Reports       Show what would be created
  folder-creator create ... --yes                 Create the planned folders"#)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Create the main folder under DIR instead of the drive root
    #[arg(long, global = true, env = BASE_DIR_ENV, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn config(&self) -> AppConfig {
        AppConfig::new(self.base_dir.clone(), self.verbose)
    }
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Fill in the folder form on the terminal (default)
    Interactive(InteractiveCommand),

    /// List sections, subfolders and their fixed sub-subfolders
    Sections(SectionsCommand),

    /// Validate the form and print the folders that would be created
    #[command(long_about = r#"Validate the form values and print every folder that would be created,
in creation order, without touching the disk.

Examples:
  folder-creator plan --code-acronym A-CABCAR --year-person 2026-Peter --drive D \
      --section Outcome --subfolder Outcome/Reports
  folder-creator plan ... --all "Field Measurements" --json"#)]
    Plan(PlanCommand),

    /// Validate the form and create the folder tree
    #[command(long_about = r#"Validate the form values and create the folder tree.

Nothing is created unless --yes confirms the main folder. A folder that cannot
be created aborts the run unless --keep-going is given, in which case every
remaining folder is still attempted and the failures are reported at the end.
Folders that already exist are left as they are."#)]
    Create(CreateCommand),
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub fn execute(command: Option<Commands>, config: &AppConfig) -> Result<()> {
        match command {
            None => InteractiveCommand::default().run(config),
            Some(Commands::Interactive(cmd)) => cmd.run(config),
            Some(Commands::Sections(cmd)) => cmd.run(),
            Some(Commands::Plan(cmd)) => cmd.run(config),
            Some(Commands::Create(cmd)) => cmd.run(config),
        }
    }
}
