//! CSS for the deck.
//!
//! Colors are CSS variables resolved from the class on `<html>`
//! (`light` or `dark`); components only carry fixed class names. Accent
//! classes (`accent-green`, ...) tint product cards.
//!
//! ```rust
//! use pitchdeck::styles::DECK_CSS;
//!
//! let my_css = ".hero-headline { letter-spacing: -0.02em; }";
//! let combined = format!("{}\n{}", DECK_CSS, my_css);
//! assert!(combined.contains("html.dark"));
//! ```

/// Complete stylesheet, embedded into static exports and `index.html`.
pub const DECK_CSS: &str = r#"
html.light {
    --bg: #ffffff;
    --bg-card: rgba(245, 245, 245, 0.4);
    --text: #171717;
    --text-muted: rgba(23, 23, 23, 0.7);
    --border: #e5e5e5;
    --button-bg: #171717;
    --button-text: #ffffff;
    --toggle-bg: #ffffff;
    --grid-stroke: #171717;
}

html.dark {
    --bg: #171717;
    --bg-card: rgba(38, 38, 38, 0.3);
    --text: #ffffff;
    --text-muted: rgba(255, 255, 255, 0.7);
    --border: #262626;
    --button-bg: #ffffff;
    --button-text: #171717;
    --toggle-bg: #262626;
    --grid-stroke: #e5e7eb;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: Inter, ui-sans-serif, system-ui, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}

a {
    color: inherit;
}

/* Primitives */

.card {
    background: var(--bg-card);
    border: 1px solid var(--border);
    border-radius: 12px;
}

.card-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem 1.25rem;
}

.card-title {
    margin: 0;
    font-size: 1.5rem;
    font-weight: 700;
}

.card-content {
    padding: 0 1.25rem 1.25rem;
}

.badge {
    display: inline-flex;
    align-items: center;
    gap: 0.25rem;
    padding: 0.125rem 0.625rem;
    border-radius: 9999px;
    font-size: 0.75rem;
    font-weight: 600;
    background: var(--button-bg);
    color: var(--button-text);
}

.badge-outline {
    background: transparent;
    color: var(--text);
    border: 1px solid var(--border);
}

.button {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.375rem 0.75rem;
    border-radius: 8px;
    font: inherit;
    font-weight: 500;
    cursor: pointer;
    text-decoration: none;
}

.button-primary {
    border: none;
    background: #86efac;
    color: #171717;
}

.button-outline {
    border: 1px solid var(--border);
    background: var(--toggle-bg);
    color: var(--text);
}

.scroll-area {
    position: relative;
    min-height: 100vh;
    overflow: hidden;
}

.scroll-area-viewport {
    height: 100%;
    overflow: auto;
    padding: 0.75rem;
}

/* Tabs */

.tab-list {
    display: inline-flex;
    border: 1px solid var(--border);
    border-radius: 12px;
}

.tabs-wide .tab-list {
    display: grid;
    grid-template-columns: 1fr 1fr;
    width: 100%;
}

.tab-trigger {
    padding: 0.5rem 1rem;
    border: none;
    border-bottom: 2px solid transparent;
    background: none;
    color: var(--text-muted);
    font: inherit;
    font-weight: 700;
    cursor: pointer;
}

.tab-trigger.active {
    color: var(--text);
    border-bottom-color: var(--text);
}

.tab-panel {
    padding-top: 1rem;
}

/* Page */

.backdrop-link {
    position: absolute;
    inset: 0;
    z-index: 1;
}

.backdrop-grid {
    width: 100%;
    height: 100%;
    opacity: 0.05;
    stroke: var(--grid-stroke);
}

.deck-main {
    position: relative;
    z-index: 2;
    max-width: 80rem;
    margin: 0 auto;
    display: flex;
    flex-direction: column;
    gap: 2rem;
}

.floating-toggle {
    position: fixed;
    right: 1rem;
    z-index: 50;
    padding: 0.75rem;
    border-radius: 9999px;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}

.language-toggle {
    top: 1rem;
}

.theme-toggle {
    bottom: 1rem;
}

html.light .theme-icon-dark,
html.dark .theme-icon-light {
    display: none;
}

.hero {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1rem;
    margin-bottom: 3rem;
    text-align: center;
}

.hero-logo .logo {
    width: 20vw;
    min-width: 12rem;
    fill: var(--text);
}

.hero-kicker {
    margin: 0;
    font-size: 3rem;
    opacity: 0.7;
}

.hero-headline {
    margin: 0;
    font-size: 3.75rem;
    font-weight: 700;
}

.section-card {
    border: none;
    background: none;
}

.section-header {
    flex-direction: column;
    text-align: center;
}

.section-subtitle {
    padding-bottom: 0.75rem;
    font-size: 1.5rem;
    opacity: 0.5;
}

.section-title {
    margin-bottom: 3rem;
    font-size: 4.5rem;
    font-weight: 400;
}

.cover-letter-card {
    padding: 1.5rem;
}

.cover-letter-title {
    font-size: 1.5rem;
    font-weight: 700;
}

.cover-letter-paragraph,
.cover-letter-closing {
    opacity: 0.8;
}

.cover-letter-closing {
    font-weight: 600;
}

.point-list {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.point {
    display: flex;
    gap: 1.5rem;
    padding: 1.5rem;
    border: 1px solid var(--border);
    border-radius: 8px;
    background: var(--bg-card);
}

.pain-point .point-icon {
    color: #f87171;
    flex-shrink: 0;
}

.solution .point-icon {
    color: #86efac;
    flex-shrink: 0;
}

.point-title {
    margin: 0;
    font-weight: 700;
}

.point-description,
.muted,
.member-description {
    opacity: 0.7;
}

.card-grid {
    display: grid;
    gap: 1.5rem;
}

@media (min-width: 768px) {
    .card-grid-3 {
        grid-template-columns: repeat(3, 1fr);
    }
}

/* Products */

.product-card {
    display: flex;
    flex-direction: column;
}

.product-visual {
    display: flex;
    justify-content: center;
    align-items: center;
    height: 13rem;
    border-radius: 12px 12px 0 0;
    background: radial-gradient(ellipse at bottom left, var(--accent-glow, transparent), transparent);
}

.product-logo {
    width: 8rem;
    padding: 1.5rem;
    border: 1px solid var(--accent-border, var(--border));
    border-radius: 1rem;
    box-shadow: 0 25px 50px -12px var(--accent-glow, transparent);
}

.product-header {
    border-top: 1px solid var(--border);
}

.accent-green { --accent-glow: rgba(134, 239, 172, 0.1); --accent-border: rgba(134, 239, 172, 0.3); }
.accent-cyan { --accent-glow: rgba(103, 232, 249, 0.1); --accent-border: rgba(6, 182, 212, 0.5); }
.accent-yellow { --accent-glow: rgba(234, 179, 8, 0.1); --accent-border: rgba(234, 179, 8, 0.3); }
.accent-indigo { --accent-glow: rgba(99, 102, 241, 0.1); --accent-border: rgba(99, 102, 241, 0.3); }
.accent-blue { --accent-glow: rgba(59, 130, 246, 0.1); --accent-border: rgba(59, 130, 246, 0.3); }
.accent-red { --accent-glow: rgba(239, 68, 68, 0.1); --accent-border: rgba(253, 224, 71, 0.3); }

.panel-heading {
    margin: 0 0 0.5rem;
    font-weight: 500;
}

.bullet-list,
.highlight-list {
    margin: 0;
    padding-left: 1.25rem;
}

.bullet-list {
    opacity: 0.7;
}

/* Revenue streams */

.revenue-header {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding-bottom: 1.5rem;
    margin-bottom: 1.5rem;
    border-bottom: 1px solid var(--border);
}

.revenue-title {
    margin: 0;
    font-size: 1.25rem;
    font-weight: 700;
}

.revenue-items {
    list-style: none;
    margin: 0;
    padding: 0;
}

.revenue-item {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.25rem 0;
}

.muted-icon {
    color: #737373;
    flex-shrink: 0;
}

/* Team */

.team-block {
    margin-bottom: 1.5rem;
}

.team-heading {
    font-size: 1.125rem;
    font-weight: 700;
}

.highlight-link {
    text-decoration: underline;
}

.member-photo {
    width: 100%;
    height: 16rem;
    object-fit: cover;
    border-radius: 8px;
    margin: 1.5rem 0 1rem;
}

.member-name {
    margin: 0 0 0.5rem;
    font-weight: 700;
}

.closing-body {
    max-width: 66%;
    margin: 0 auto;
    text-align: center;
    opacity: 0.7;
}
"#;
