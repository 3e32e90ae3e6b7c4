//! Printing Department: finds paper rolls a forklift can get to.

use std::fs;
use std::path::Path;

use miette::*;
use tracing_subscriber::EnvFilter;

pub mod grid;
pub mod part1;
pub mod part2;

/// Installs a stderr subscriber so stdout only carries the solutions.
///
/// Verbosity comes from `RUST_LOG`, defaulting to warnings.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Reads the puzzle input, failing with a diagnostic if the file is missing.
pub fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        bail!("Given file '{}' does not exist", path.display());
    }

    fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed reading '{}'", path.display()))
}
