//! FILENAME: app/src/lib.rs
// PURPOSE: Command-line front end: load the dataset once, build one page, render it.

use std::io::Write;

use dataset::SelectorError;
use persistence::PersistenceError;
use thiserror::Error;

pub mod cli;
pub mod logging;
pub mod render;
pub mod views;

pub use cli::{Cli, OutputFormat, ViewCommand};
pub use views::{build_page, Page};

use logging::{effective_level, init_logging};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to load dataset: {0}")]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Loads the configured sources and writes the requested page to `out`.
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<(), AppError> {
    let events = persistence::load_events(&cli.sources())?;
    log_info!("APP", "Loaded {} Summer games rows", events.len());

    let page = build_page(&events, &cli.view);
    render::render(&page, cli.format, out)?;
    out.flush()?;
    Ok(())
}

/// Process entry: installs logging, then runs the selected view on stdout.
pub fn run(cli: Cli) -> Result<(), AppError> {
    init_logging(
        effective_level(cli.log_level, cli.verbose),
        cli.log_file.as_deref(),
    )?;
    log_info!("APP", "olympics v{} starting", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out)
}
