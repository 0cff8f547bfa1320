//! Command-line interface implementation for apigen.
//! Every flag is optional: a bare invocation generates from `api.json` in the
//! current directory with the built-in task list.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for apigen.
#[derive(Parser, Debug)]
#[command(author, version, about = "apigen: render server routes and a web client from a JSON API definition", long_about = None)]
pub struct Args {
    /// Project root that inputs, templates and outputs are relative to
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Configuration file (defaults to apigen.json, apigen.yml or apigen.yaml in the root)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// API definition to read instead of the configured one
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
