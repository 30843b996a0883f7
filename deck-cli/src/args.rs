//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pitchdeck::model::{CtaPolicy, Language, Theme};

#[derive(Parser, Debug)]
#[command(name = "pitchdeck")]
#[command(about = "Render, check and export the W3BOTS pitch deck")]
#[command(version)]
pub struct Cli {
    /// Config file (default: ./pitchdeck.toml when it exists)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the deck to a static HTML file
    Render(RenderArgs),
    /// Check that both languages of a catalog have the same shape
    Check(CatalogArgs),
    /// Print one language of the catalog as JSON
    Export(ExportArgs),
}

#[derive(Args, Debug, Default)]
pub struct CatalogArgs {
    /// Catalog JSON file (default: the catalog built into the binary)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Language: de or en
    #[arg(long, conflicts_with = "all_languages")]
    pub lang: Option<Language>,

    /// Initial theme: light or dark
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Product card action: link-or-status (default) or always-test-link
    #[arg(long)]
    pub cta: Option<CtaPolicy>,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Output file
    #[arg(long, short, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Write one file per language (<stem>.de.html, <stem>.en.html)
    #[arg(long)]
    pub all_languages: bool,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Language to export: de or en
    #[arg(long)]
    pub lang: Language,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}
