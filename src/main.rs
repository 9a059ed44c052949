// Folder Creator - research group project folder trees
// Main CLI entry point

use clap::Parser;
use std::process;
use folder_creator::cli::{Cli, CliDispatcher};
use folder_creator::utils::error::UserError;
use folder_creator::utils::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    let config = cli.config();
    init_logging(&config);

    let result = CliDispatcher::execute(cli.command, &config);

    if let Err(err) = result {
        let user_error = UserError::from_folder_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
