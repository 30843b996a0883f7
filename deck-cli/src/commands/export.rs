//! `pitchdeck export`

use anyhow::{Context, Result};

use super::load_catalog;
use crate::args::ExportArgs;
use crate::config::DeckConfig;

/// Print the localized slice for `--lang` as pretty JSON.
pub fn run(args: &ExportArgs, config: &DeckConfig) -> Result<()> {
    let catalog = load_catalog(args.catalog.catalog.as_deref(), config)?;
    let json = serde_json::to_string_pretty(catalog.get(args.lang))
        .context("serializing localized content")?;
    println!("{json}");
    Ok(())
}
