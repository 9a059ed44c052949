// Logging setup

use tracing_subscriber::EnvFilter;

use crate::utils::config::AppConfig;

/// Install the global tracing subscriber. Logs go to stderr so that stdout
/// stays usable for `--json` output. `RUST_LOG` overrides the verbosity flags.
pub fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("folder_creator={}", config.log_directive())));

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
