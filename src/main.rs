//! Binary entry point for featopts.
//!
//! Parses the feature flags on top of the baseline server configuration and
//! prints the configuration the server would run with.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, bail};
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, ValueEnum};
use featopts::observability::{self, LogFormat, LoggingConfig};
use featopts::{FeatureOptions, ServerConfig, ServerOption};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Featopts - resolve server feature toggles from flags and config.
#[derive(Parser)]
#[command(name = "featopts")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    /// Output format for the resolved configuration.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

/// Output formats for the resolved configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One `key = value` line per setting.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Main entry point.
fn main() -> ExitCode {
    // Flag defaults shown in help come from the built-in baseline; the
    // config file is only known after parsing.
    let matches = FeatureOptions::new().add_flags(Cli::command()).get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    if let Err(e) = observability::init(LoggingConfig::new(cli.log_format, cli.verbose)) {
        eprintln!("Failed to initialize observability: {e}");
        return ExitCode::FAILURE;
    }

    match run(&cli, &matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        },
    }
}

/// Resolves and prints the server configuration.
fn run(cli: &Cli, matches: &ArgMatches) -> anyhow::Result<()> {
    let mut config = load_config(cli.config.as_deref())?;

    let mut features = FeatureOptions::from_defaults(&config);
    features.read_flags(matches);

    let errors = features.validate().unwrap_or_default();
    if !errors.is_empty() {
        for error in &errors {
            tracing::error!(error = %error, "Invalid feature options");
        }
        bail!("{} invalid feature option(s)", errors.len());
    }

    features
        .apply_to(&mut config)
        .context("failed to apply feature options")?;

    print_config(&config, cli.output)
}

/// Loads the baseline configuration.
fn load_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => ServerConfig::load_from_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => Ok(ServerConfig::load_default()),
    }
}

/// Prints the resolved configuration to stdout.
fn print_config(config: &ServerConfig, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        },
        OutputFormat::Text => {
            println!("enable_metrics = {}", config.enable_metrics);
            println!("enable_profiling = {}", config.enable_profiling);
            println!(
                "enable_contention_profiling = {}",
                config.enable_contention_profiling
            );
            println!("enable_watermarks = {}", config.enable_watermarks);
            println!("enable_index = {}", config.enable_index);
            println!("enable_discovery = {}", config.enable_discovery);
        },
    }
    Ok(())
}
