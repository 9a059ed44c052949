use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::utils::fs_utils::ensure_directory_exists;

/// What to do after a directory could not be created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureDecision {
    Continue,
    Abort,
}

/// Result of one attempted directory creation
#[derive(Debug)]
pub struct CreationOutcome {
    pub path: PathBuf,
    pub result: io::Result<()>,
}

impl CreationOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Serializable view of a finished creation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreationReport {
    pub main_folder: PathBuf,
    pub created: Vec<PathBuf>,
    pub failed: Vec<FailedPath>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedPath {
    pub path: PathBuf,
    pub error: String,
}

impl CreationReport {
    pub fn from_outcomes(main_folder: PathBuf, outcomes: &[CreationOutcome]) -> Self {
        let mut created = Vec::new();
        let mut failed = Vec::new();
        for outcome in outcomes {
            match &outcome.result {
                Ok(()) => created.push(outcome.path.clone()),
                Err(e) => failed.push(FailedPath {
                    path: outcome.path.clone(),
                    error: e.to_string(),
                }),
            }
        }
        Self { main_folder, created, failed }
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

fn create_one(path: &Path) -> CreationOutcome {
    let result = ensure_directory_exists(path);
    match &result {
        Ok(()) => debug!(path = %path.display(), "folder ready"),
        Err(e) => warn!(path = %path.display(), error = %e, "folder creation failed"),
    }
    CreationOutcome {
        path: path.to_path_buf(),
        result,
    }
}

/// Ensure every path exists, in order, attempting all of them even after a
/// failure. Existing directories count as success.
pub fn create_all(paths: &[PathBuf]) -> Vec<CreationOutcome> {
    paths.iter().map(|path| create_one(path)).collect()
}

/// Like [`create_all`], but every failure is handed to `on_failure` before the
/// next path is attempted. Returning [`FailureDecision::Abort`] stops the run;
/// the returned outcomes then end with the failing path.
pub fn create_each<F>(
    paths: &[PathBuf],
    mut on_failure: F,
) -> (Vec<CreationOutcome>, FailureDecision)
where
    F: FnMut(&Path, &io::Error) -> FailureDecision,
{
    let mut outcomes = Vec::with_capacity(paths.len());
    for path in paths {
        let outcome = create_one(path);
        let decision = match &outcome.result {
            Ok(()) => FailureDecision::Continue,
            Err(e) => on_failure(&outcome.path, e),
        };
        outcomes.push(outcome);
        if decision == FailureDecision::Abort {
            return (outcomes, FailureDecision::Abort);
        }
    }
    (outcomes, FailureDecision::Continue)
}
