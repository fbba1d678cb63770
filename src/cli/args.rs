//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Clone an integration's dashboard assets under fresh identifiers
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Source package root
    #[arg(long, value_hint = clap::ValueHint::DirPath)]
    pub src: PathBuf,

    /// Destination package root (defaults to the source package root)
    #[arg(long, value_hint = clap::ValueHint::DirPath)]
    pub dst: Option<PathBuf>,

    /// Only print the rewritten assets as one JSON document keyed by original file name
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_value = "true", default_missing_value = "true", require_equals = true)]
    pub dry_run: bool,

    /// Log every rewritten identifier
    #[arg(short, long)]
    pub verbose: bool,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}
