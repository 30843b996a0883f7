//! # pitchdeck
//!
//! Command-line host for the W3BOTS pitch deck.
//!
//! ## Usage
//!
//! ```bash
//! # Static HTML snapshot (English, dark)
//! pitchdeck render
//!
//! # Both languages, light theme
//! pitchdeck render --all-languages --theme light --out dist/deck.html
//!
//! # Validate an edited catalog
//! pitchdeck check --catalog content/catalog.json
//!
//! # Hand one language to translators
//! pitchdeck export --lang de > de.json
//! ```

mod args;
mod commands;
mod config;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::Parser;
use tracing::debug;

use args::{Cli, Command};
use config::DeckConfig;

fn load_config(cli: &Cli) -> Result<DeckConfig> {
    match &cli.config {
        Some(path) if !path.exists() => bail!("config file {} not found", path.display()),
        Some(path) => Ok(DeckConfig::load_from_path(path)),
        None => Ok(DeckConfig::load(Path::new("."))),
    }
}

fn init_logging(cli: &Cli, config: &DeckConfig) {
    let level = cli
        .log_level
        .as_deref()
        .or(config.log_level.as_deref())
        .unwrap_or("info");

    // stdout carries the command's output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(&cli)?;
    init_logging(&cli, &config);
    debug!(?config, "configuration loaded");

    match &cli.command {
        Command::Render(args) => commands::render(args, &config)?,
        Command::Check(args) => {
            if !commands::check(args, &config)? {
                return Ok(ExitCode::from(1));
            }
        }
        Command::Export(args) => commands::export(args, &config)?,
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[pitchdeck] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
