// Shared utilities: errors, validation grammars, configuration, logging
pub mod config;
pub mod error;
pub mod fs_utils;
pub mod logging;
pub mod validation;
