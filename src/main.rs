//! clonedash - deep-copy an integration's dashboard assets under fresh identifiers.

mod cli;
mod collect;
mod config;
mod core;
mod logger;
mod output;
mod rewrite;
mod utils;

use clap::{ColorChoice, Parser};
use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Missing or malformed arguments print usage and exit with status 2
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log!("error"; "{:#}", e);
            ExitCode::FAILURE
        }
    }
}
