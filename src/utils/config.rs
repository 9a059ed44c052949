// Runtime configuration assembled from command-line flags and environment

use std::path::PathBuf;

/// Environment variable that supplies a default for `--base-dir`
pub const BASE_DIR_ENV: &str = "FOLDER_CREATOR_BASE_DIR";

/// Settings shared by every command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Replaces the drive root (`D:/`) as the parent of the main folder
    pub base_dir: Option<PathBuf>,
    /// Number of `-v` flags given
    pub verbosity: u8,
}

impl AppConfig {
    pub fn new(base_dir: Option<PathBuf>, verbosity: u8) -> Self {
        Self {
            base_dir: base_dir.filter(|dir| !dir.as_os_str().is_empty()),
            verbosity,
        }
    }

    /// Default log directive when `RUST_LOG` is not set
    pub fn log_directive(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
