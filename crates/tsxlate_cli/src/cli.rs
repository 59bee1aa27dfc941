//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;
use tsxlate_core::Target;

/// tsxlate - Translate TypeScript into other notations
#[derive(Parser)]
#[command(name = "tsxlate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TypeScript file to translate
    pub file: PathBuf,

    /// Target notation (defaults to the config file's, then noop)
    #[arg(short, long, value_enum)]
    pub target: Option<Target>,

    /// Shorthand for `--target python`
    #[arg(short, long, conflicts_with = "target")]
    pub python: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when the output contains unknown syntax
    #[arg(long)]
    pub strict: bool,

    /// Print the parsed syntax tree as JSON instead of translating
    #[arg(long)]
    pub emit_ast: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Returns the target selected on the command line, if any.
    pub fn selected_target(&self) -> Option<Target> {
        if self.python {
            Some(Target::Python)
        } else {
            self.target
        }
    }
}
