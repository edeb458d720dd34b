//! FILENAME: app/src/main.rs
// PURPOSE: Binary entry point.

use std::process::ExitCode;

use app_lib::logging::log_error;
use clap::Parser;

fn main() -> ExitCode {
    let cli = app_lib::Cli::parse();
    match app_lib::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_error!("APP", "{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
