//! Root document component - the complete HTML page

use std::sync::Arc;

use leptos::prelude::*;

use super::DeckPage;
use crate::RenderOptions;
use crate::catalog::Catalog;
use crate::styles::DECK_CSS;

/// The complete HTML document for a static export.
///
/// The theme is written into `<html class>` directly, so the page needs no
/// applier. [`THEME_SCRIPT`] keeps the theme toggle working without a
/// runtime; language and tabs stay as rendered.
#[component]
pub fn DeckDocument(
    /// Content in both languages
    catalog: Arc<Catalog>,
    /// Language, theme and call-to-action policy
    options: RenderOptions,
) -> impl IntoView {
    let title = format!("W3BOTS - {}", catalog.get(options.language).hero.headline);

    view! {
        <html class=options.theme.as_str() lang=options.language.code()>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{DECK_CSS}</style>
            </head>
            <body>
                <DeckPage
                    catalog=catalog
                    language=options.language
                    theme=options.theme
                    cta=options.cta
                />
                <script>{THEME_SCRIPT}</script>
            </body>
        </html>
    }
}

/// Flips the `<html>` class between `light` and `dark` on toggle clicks.
/// Nothing is stored.
pub const THEME_SCRIPT: &str = r#"
(function () {
  var root = document.documentElement;
  var toggle = document.querySelector('[data-role="theme-toggle"]');
  if (!toggle) {
    return;
  }
  toggle.addEventListener('click', function () {
    root.className = root.className === 'dark' ? 'light' : 'dark';
  });
})();
"#;
