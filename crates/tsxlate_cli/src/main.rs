//! tsxlate CLI
//!
//! Translates a TypeScript file into another notation and prints the result.

mod cli;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser as _;
use miette::{IntoDiagnostic, Result, miette};
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

use tsxlate_ast::AstArena;
use tsxlate_core::{TranslateConfig, translate};
use tsxlate_parser::{Parser, TypeScriptParser};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(has_unknown) => {
            if has_unknown {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

/// Runs the translation. Returns true when `--strict` should fail the run.
fn run(cli: &Cli) -> Result<bool> {
    let mut config = load_config(cli)?;
    if let Some(target) = cli.selected_target() {
        config.target = target;
    }
    if cli.strict {
        config.strict = true;
    }

    let parser = TypeScriptParser::new();
    if let Some(ext) = cli.file.extension().and_then(|ext| ext.to_str())
        && !parser.can_parse(ext)
    {
        warn!(
            "{} does not look like a TypeScript file, parsing it anyway",
            cli.file.display()
        );
    }

    if cli.emit_ast {
        emit_ast(&parser, &cli.file)?;
        return Ok(false);
    }

    debug!("Target: {}", config.target);
    let visitor = config.target.visitor();
    let output = translate(&parser, &cli.file, visitor.as_ref()).into_diagnostic()?;
    println!("{}", output);

    let unknown = output.unknown_count();
    if unknown == 0 {
        return Ok(false);
    }
    if config.strict {
        warn!("Output contains {} unknown syntax nodes", unknown);
        return Ok(true);
    }
    debug!("Output contains {} unknown syntax nodes", unknown);
    Ok(false)
}

fn load_config(cli: &Cli) -> Result<TranslateConfig> {
    if let Some(ref path) = cli.config {
        return TranslateConfig::from_file(path).into_diagnostic();
    }

    let cwd = std::env::current_dir().into_diagnostic()?;
    match TranslateConfig::discover(&cwd) {
        Some(path) => {
            debug!("Using config {}", path.display());
            TranslateConfig::from_file(&path).into_diagnostic()
        }
        None => Ok(TranslateConfig::default()),
    }
}

fn emit_ast(parser: &TypeScriptParser, path: &Path) -> Result<()> {
    let text = fs::read_to_string(path)
        .map_err(|e| miette!("Failed to read {}: {}", path.display(), e))?;

    let arena = AstArena::for_source(text.len());
    let root = parser.parse(&arena, &text).into_diagnostic()?;

    let json = serde_json::to_string_pretty(&root).into_diagnostic()?;
    println!("{}", json);
    Ok(())
}
