//! Subcommand implementations.

mod check;
mod export;
mod render;

use std::path::Path;

use anyhow::{Context, Result};
use pitchdeck::catalog::Catalog;
use tracing::{debug, info};

use crate::config::DeckConfig;

pub use check::run as check;
pub use export::run as export;
pub use render::run as render;

/// Catalog from `--catalog`, else from the config file, else the built-in one.
fn load_catalog(flag: Option<&Path>, config: &DeckConfig) -> Result<Catalog> {
    match flag.or(config.catalog.as_deref()) {
        Some(path) => {
            info!(path = %path.display(), "loading catalog");
            Catalog::load(path).with_context(|| format!("loading catalog {}", path.display()))
        }
        None => {
            debug!("using built-in catalog");
            Catalog::embedded().context("parsing built-in catalog")
        }
    }
}
