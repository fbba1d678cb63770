//! Command-line interface module.

mod args;
pub mod clone;

pub use args::Cli;

use anyhow::Result;
use std::io;

use crate::config::CloneConfig;

/// Resolve configuration and run the clone, previewing to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let config = CloneConfig::from_cli(cli)?;
    clone::clone_assets(&config, io::stdout().lock())
}
