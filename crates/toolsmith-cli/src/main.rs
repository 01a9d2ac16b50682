//! Toolsmith CLI
//!
//! Command-line interface for the toolsmith helpers.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use toolsmith_cli::cli::Cli;
use toolsmith_cli::commands;
use toolsmith_cli::config::ToolsmithConfig;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();
    let config = ToolsmithConfig::load(config_path).context("Failed to load configuration")?;

    init_tracing(&config, cli.verbose);
    tracing::debug!(?config, "Effective configuration");

    let mut stdout = std::io::stdout().lock();
    let ok = commands::run(cli.command, config_path, &config, &mut stdout)?;

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Installs the fmt subscriber on stderr. `RUST_LOG` wins over the
/// configured filter; `--verbose` raises the fallback to `debug`.
fn init_tracing(config: &ToolsmithConfig, verbose: bool) {
    let fallback = if verbose { "debug" } else { config.log.filter.as_str() };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
