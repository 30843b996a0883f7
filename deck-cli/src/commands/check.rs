//! `pitchdeck check`

use anyhow::Result;
use pitchdeck::model::Language;
use tracing::warn;

use super::load_catalog;
use crate::args::CatalogArgs;
use crate::config::DeckConfig;

/// Print one line per parity violation. `Ok(false)` when there are any.
pub fn run(args: &CatalogArgs, config: &DeckConfig) -> Result<bool> {
    let catalog = load_catalog(args.catalog.as_deref(), config)?;
    let violations = catalog.parity_violations();

    if violations.is_empty() {
        let content = catalog.get(Language::ALL[0]);
        println!(
            "catalog OK: {} products, {} revenue streams, {} team members per language",
            content.products.len(),
            content.revenue_streams.len(),
            content.team.members.len()
        );
        return Ok(true);
    }

    for violation in &violations {
        println!("{violation}");
    }
    warn!(count = violations.len(), "catalog languages are out of parity");
    Ok(false)
}
