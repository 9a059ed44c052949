use clap::Args;
use serde_json::json;
use std::path::PathBuf;

use crate::cli::form_args::FormArgs;
use crate::services::form_controller::FormController;
use crate::utils::config::AppConfig;
use crate::utils::error::Result;

/// Show the planned folders without creating anything
#[derive(Debug, Args)]
pub struct PlanCommand {
    #[command(flatten)]
    pub form: FormArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl PlanCommand {
    pub fn run(&self, config: &AppConfig) -> Result<()> {
        let controller = FormController::new()
            .with_base_dir(config.base_dir.clone())
            .with_state(self.form.to_form_state()?);
        let paths = controller.plan()?;
        println!("{}", render_plan(&paths, self.json)?);
        Ok(())
    }
}

/// Human or JSON rendering of a path plan; the first path is the main folder
pub fn render_plan(paths: &[PathBuf], as_json: bool) -> Result<String> {
    if as_json {
        let output = json!({
            "main_folder": paths.first(),
            "paths": paths,
        });
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    let mut lines = Vec::with_capacity(paths.len() + 1);
    if let Some(main) = paths.first() {
        lines.push(format!("Main folder: {}", main.display()));
    }
    lines.extend(paths.iter().map(|p| format!("  {}", p.display())));
    Ok(lines.join("\n"))
}
