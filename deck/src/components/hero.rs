//! Title banner and the page backdrop.

use leptos::prelude::*;

use crate::catalog::Hero as HeroCopy;

/// Company wordmark.
const LOGO_SVG: &str = include_str!("../../content/logo.svg");

/// Faint grid drawn behind the whole page.
const BACKDROP_SVG: &str = r#"<svg class="backdrop-grid" aria-hidden="true"><defs><pattern id="backdrop-grid" width="200" height="200" x="50%" y="-1" patternUnits="userSpaceOnUse"><path d="M.5 200V.5H200" fill="none"></path></pattern></defs><rect width="100%" height="100%" stroke-width="0" fill="url(#backdrop-grid)"></rect></svg>"#;

/// Logo, kicker and headline, over a backdrop that links to the company site.
#[component]
pub fn Hero(
    /// Kicker and headline
    hero: HeroCopy,
    /// Company site opened from the backdrop
    site_url: String,
) -> impl IntoView {
    view! {
        <a
            class="backdrop-link"
            href=site_url
            target="_blank"
            rel="noopener noreferrer"
            aria-label="W3BOTS"
            inner_html=BACKDROP_SVG
        ></a>
        <header class="hero" data-section="hero">
            <div class="hero-logo" inner_html=LOGO_SVG></div>
            <p class="hero-kicker">{hero.kicker}</p>
            <h1 class="hero-headline">{hero.headline}</h1>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render_html;

    #[test]
    fn renders_logo_and_copy() {
        let html = render_html(|| {
            view! {
                <Hero
                    hero=HeroCopy {
                        kicker: "Techstars Web3 Accelerator".into(),
                        headline: "Application 2024".into(),
                    }
                    site_url="https://w3bots.de/".to_string()
                />
            }
        });

        assert!(html.contains(r#"<h1 class="hero-headline">Application 2024</h1>"#));
        assert!(html.contains("Techstars Web3 Accelerator"));
        assert!(html.contains(r#"aria-label="W3BOTS""#));
        assert!(html.contains(r#"href="https://w3bots.de/""#));
        assert!(html.contains("backdrop-grid"));
    }
}
