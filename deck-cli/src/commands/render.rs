//! `pitchdeck render`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pitchdeck::model::Language;
use pitchdeck::{RenderOptions, render_page};
use tracing::info;

use super::load_catalog;
use crate::args::RenderArgs;
use crate::config::DeckConfig;

/// Output file when neither `--out` nor the config names one.
pub const DEFAULT_OUT: &str = "pitchdeck.html";

pub fn run(args: &RenderArgs, config: &DeckConfig) -> Result<()> {
    let catalog = load_catalog(args.catalog.catalog.as_deref(), config)?;
    catalog
        .validate()
        .context("refusing to render an out-of-parity catalog")?;

    let render = &config.render;
    let base = RenderOptions {
        language: args.lang.or(render.language).unwrap_or_default(),
        theme: args.theme.or(render.theme).unwrap_or_default(),
        cta: args.cta.or(render.cta).unwrap_or_default(),
    };
    let out = args
        .out
        .clone()
        .or_else(|| render.out.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT));
    let all_languages = args.all_languages || (args.lang.is_none() && render.all_languages);

    if all_languages {
        for language in Language::ALL {
            let options = RenderOptions { language, ..base };
            write_page(&language_path(&out, language), &render_page(&catalog, &options))?;
        }
    } else {
        write_page(&out, &render_page(&catalog, &base))?;
    }
    Ok(())
}

/// `deck.html` -> `deck.de.html`
fn language_path(out: &Path, language: Language) -> PathBuf {
    let stem = out
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("pitchdeck");
    let extension = out
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("html");
    out.with_file_name(format!("{stem}.{}.{extension}", language.code()))
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = html.len(), "page written");
    println!("{}", path.display());
    Ok(())
}
