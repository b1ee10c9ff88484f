//! Config Linter CLI
//!
//! Validates KSP config files against the built-in schemas and exits
//! non-zero when any error is found.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use cfglint::{report, LintConfig, Linter, OutputFormat};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cfglint")]
#[command(about = "Lint KSP config files (PART, RESOURCE_DEFINITION, ...)")]
#[command(version)]
struct Cli {
    /// Config files or directories to lint
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Game data directory scanned for RESOURCE_DEFINITION blocks (repeatable)
    #[arg(long, value_name = "DIR")]
    gamedata: Vec<PathBuf>,

    /// File holding RESOURCE_DEFINITION blocks (repeatable)
    #[arg(long, value_name = "FILE")]
    resources: Vec<PathBuf>,

    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Print an error/warning count at the end
    #[arg(long)]
    summary: bool,

    /// Exit non-zero on warnings too
    #[arg(long)]
    deny_warnings: bool,

    /// Debug logging (ignored when RUST_LOG is set)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Lint ran and found nothing failing
const EXIT_CLEAN: u8 = 0;
/// Lint ran and found errors (or warnings under --deny-warnings)
const EXIT_FAILED: u8 = 1;
/// Lint could not run
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(true) => ExitCode::from(EXIT_CLEAN),
        Ok(false) => ExitCode::from(EXIT_FAILED),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_USAGE)
        }
    }
}

/// Returns whether the run passed
fn run(cli: Cli) -> anyhow::Result<bool> {
    let mut config = LintConfig::load_from(cli.config.as_deref()).context("loading configuration")?;
    config.resources.gamedata.extend(cli.gamedata);
    config.resources.files.extend(cli.resources);
    if let Some(format) = cli.format {
        config.output.format = match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        };
    }
    config.output.summary |= cli.summary;
    config.lint.deny_warnings |= cli.deny_warnings;

    let resources = config
        .build_resource_table()
        .context("building resource table")?;
    let linter = Linter::new(resources);
    let result = linter.lint_paths(&cli.paths, &config.lint.extension);

    match config.output.format {
        OutputFormat::Text => {
            print!("{}", report::render_text(&result));
            if config.output.summary {
                println!("{}", report::summary_line(&result));
            }
        }
        OutputFormat::Json => println!("{}", report::render_json(&result)?),
    }

    let failed = result.has_errors()
        || (config.lint.deny_warnings && result.diagnostics.warning_count() > 0);
    Ok(!failed)
}
