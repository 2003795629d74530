//! Command-line interface for repofold
//!
//! This module provides argument parsing and the top-level run loop for
//! the repofold binary: resolve configuration, load the directory tree,
//! run the import pipeline, and emit the artifact plus an optional JSON
//! run summary.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use serde::Serialize;

use crate::loader;
use repofold_config::Config;
use repofold_packet::{ImportArtifact, ImportPipeline};
use repofold_utils::error::{ConfigError, RepofoldError};
use repofold_utils::exit_codes::ExitCode;
use repofold_utils::logging::init_tracing;
use repofold_utils::types::SkipRecord;

/// repofold - fold a repository tree into one text-safe artifact
#[derive(Parser, Debug)]
#[command(name = "repofold")]
#[command(about = "Folds a cloned repository tree into a single size-bounded, text-safe artifact")]
#[command(long_about = r#"
repofold walks a local checkout and produces one delimited artifact string
containing every admitted text file, plus an auditable summary of every
path that was skipped and why (filtered, binary, decode-error, too-large,
budget-exceeded).

EXAMPLES:
  # Fold the current checkout into an artifact on stdout
  repofold .

  # Write the artifact to a file, with custom labels
  repofold ~/work/project --source acme/project --output context.txt

  # Print a machine-readable run summary instead of the artifact
  repofold . --output context.txt --json

  # Tighten the size ceilings and exclude generated code
  repofold . --per-file-bytes 51200 --total-bytes 256000 --exclude 'gen/**'

CONFIGURATION:
  Configuration is loaded with precedence: CLI flags > config file > defaults
  Use --config to point at a TOML file with [limits] and [selectors] tables
"#)]
#[command(version)]
pub struct Cli {
    /// Directory containing the cloned repository tree
    pub dir: Utf8PathBuf,

    /// Label for the source repository in the artifact header
    /// (defaults to the directory name)
    #[arg(long)]
    pub source: Option<String>,

    /// Label for the import destination in the artifact header
    #[arg(long, default_value = "the current session")]
    pub destination: String,

    /// Write the artifact to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<Utf8PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<Utf8PathBuf>,

    /// Override the per-file size ceiling in bytes
    #[arg(long)]
    pub per_file_bytes: Option<usize>,

    /// Override the aggregate size ceiling in bytes
    #[arg(long)]
    pub total_bytes: Option<usize>,

    /// Additional glob pattern to exclude (repeatable)
    #[arg(long = "exclude")]
    pub exclude: Vec<String>,

    /// Print a JSON run summary to stdout (requires --output)
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Machine-readable summary of one import run, emitted with `--json`.
#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    source: &'a str,
    destination: &'a str,
    blake3_hash: &'a str,
    admitted_bytes: usize,
    admitted_count: usize,
    skipped_count: usize,
    admitted_paths: &'a [String],
    skipped: &'a [SkipRecord],
}

/// Parse arguments, run the import, and map errors to exit codes.
///
/// All human-facing output happens here; main.rs only maps the returned
/// code to a process exit.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();

    // A second subscriber (e.g. in tests) is fine; logging just stays
    // with whoever installed first.
    let _ = init_tracing(cli.verbose);

    execute(&cli).map_err(|e| {
        eprintln!("error: {e}");
        e.to_exit_code()
    })
}

fn execute(cli: &Cli) -> Result<(), RepofoldError> {
    if cli.json && cli.output.is_none() {
        return Err(ConfigError::InvalidValue {
            key: "--json".to_string(),
            value: "requires --output so the artifact and the summary do not share stdout"
                .to_string(),
        }
        .into());
    }

    let config = resolve_config(cli)?;
    let pipeline = ImportPipeline::with_config(&config)?;

    let entries = loader::load_directory(&cli.dir)?;
    let source = cli
        .source
        .clone()
        .unwrap_or_else(|| source_label(&cli.dir).to_string());

    let result = pipeline.run(entries, &source, &cli.destination)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, result.artifact())?;
            tracing::info!(output = %path, hash = %result.hash(), "artifact written");
        }
        None => print!("{}", result.artifact()),
    }

    if cli.json {
        println!("{}", summary_json(&source, &cli.destination, &result)?);
    }

    Ok(())
}

/// Build the effective configuration: defaults, then the config file if
/// given, then CLI overrides, then a final validation pass.
fn resolve_config(cli: &Cli) -> Result<Config, RepofoldError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(bytes) = cli.per_file_bytes {
        config.limits.per_file_bytes = bytes;
    }
    if let Some(bytes) = cli.total_bytes {
        config.limits.total_bytes = bytes;
    }
    config.selectors.exclude.extend(cli.exclude.iter().cloned());

    config.validate()?;
    Ok(config)
}

fn summary_json(
    source: &str,
    destination: &str,
    result: &ImportArtifact,
) -> Result<String, RepofoldError> {
    let summary = RunSummary {
        source,
        destination,
        blake3_hash: result.hash(),
        admitted_bytes: result.admitted_bytes,
        admitted_count: result.admitted_paths.len(),
        skipped_count: result.skipped.len(),
        admitted_paths: &result.admitted_paths,
        skipped: &result.skipped,
    };
    serde_json::to_string_pretty(&summary).map_err(|e| std::io::Error::other(e).into())
}

fn source_label(dir: &Utf8Path) -> &str {
    match dir.file_name() {
        Some(name) if !name.is_empty() => name,
        _ => dir.as_str(),
    }
}
