//! # pitchdeck
//!
//! Bilingual, themeable pitch-deck page built from [Leptos](https://leptos.dev/)
//! components.
//!
//! All copy lives in a language-keyed [`catalog::Catalog`]. A single page
//! controller owns the active [`model::Language`] and [`model::Theme`] and
//! hands each composite component one localized record; composites bind
//! those records onto a small set of styled primitives.
//!
//! ## Quick Start
//!
//! ```rust
//! use pitchdeck::{render_page, RenderOptions, catalog::Catalog, model::Language};
//!
//! let catalog = Catalog::embedded().unwrap();
//! let options = RenderOptions {
//!     language: Language::De,
//!     ..Default::default()
//! };
//!
//! let html = render_page(&catalog, &options);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Bewerbung 2024"));
//! ```
//!
//! ## Architecture
//!
//! - [`model`] - language, theme, page controller, tab model
//! - [`catalog`] - content records, embedded catalog, parity checks
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//! - [`error`] - error types
//!
//! ## Features
//!
//! - `ssr` (default) - static rendering through [`render_page`]
//! - `csr` - client-side rendering for the browser build

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod components;
pub mod error;
pub mod model;
pub mod styles;

use model::{CtaPolicy, Language, Theme};

/// What a static render shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Language of the copy and the `lang` attribute
    pub language: Language,
    /// Initial `<html>` class
    pub theme: Theme,
    /// Product card call-to-action policy
    pub cta: CtaPolicy,
}

/// Render the complete page as an HTML document.
///
/// The result is a snapshot: tabs show their default panels, the language
/// is fixed, and only the theme toggle stays live (see
/// [`components::THEME_SCRIPT`]).
///
/// ```rust
/// use pitchdeck::{render_page, RenderOptions, catalog::Catalog, model::Theme};
///
/// let catalog = Catalog::embedded().unwrap();
/// let html = render_page(&catalog, &RenderOptions { theme: Theme::Light, ..Default::default() });
/// assert!(html.contains(r#"<html class="light" lang="en">"#));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page(catalog: &catalog::Catalog, options: &RenderOptions) -> String {
    use std::sync::Arc;

    use components::DeckDocument;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    let catalog = Arc::new(catalog.clone());
    let options = *options;
    let html = Owner::new().with(move || {
        view! { <DeckDocument catalog=catalog options=options /> }.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
