//! The page controller component.

use std::sync::Arc;

use leptos::prelude::*;

use super::{
    ClosingStatement, CoverLetterCard, Hero, LanguageToggle, ProblemSolution, ProductCard,
    RevenueModel, ScrollArea, Section, TeamSection, ThemeToggle,
};
use crate::catalog::{Catalog, LocalizedContent};
use crate::model::{ApplyTheme, CtaPolicy, Language, NoopTheme, PageController, Theme};

/// The whole deck.
///
/// Owns the page's [`PageController`]. The toggles receive the current
/// language and theme plus a setter; everything below them receives plain
/// localized records. A language change re-derives the content from the
/// catalog and re-renders the sections. A theme change only goes through
/// the applier.
#[component]
pub fn DeckPage(
    /// Content in both languages
    catalog: Arc<Catalog>,
    /// Language at mount
    #[prop(optional)]
    language: Language,
    /// Theme at mount
    #[prop(optional)]
    theme: Theme,
    /// Product card call-to-action policy
    #[prop(optional)]
    cta: CtaPolicy,
    /// Writes the theme to the root scope; nothing by default
    #[prop(optional)]
    applier: Option<Arc<dyn ApplyTheme>>,
) -> impl IntoView {
    let applier = applier.unwrap_or_else(|| Arc::new(NoopTheme));
    let controller = RwSignal::new(PageController::new(language, theme, move |theme: Theme| {
        applier.apply(theme)
    }));

    view! { <DeckBody catalog=catalog controller=controller cta=cta /> }
}

/// Toggles and sections driven by a mounted controller.
#[component]
fn DeckBody(
    catalog: Arc<Catalog>,
    controller: RwSignal<PageController>,
    cta: CtaPolicy,
) -> impl IntoView {
    let language = Memo::new(move |_| controller.with(|page| page.language()));
    let theme = Memo::new(move |_| controller.with(|page| page.theme()));
    let set_language = Callback::new(move |next: Language| {
        controller.update(|page| page.set_language(next))
    });
    let set_theme = Callback::new(move |next: Theme| controller.update(|page| page.set_theme(next)));

    let sections = move || {
        language.track();
        let content = controller.with_untracked(|page| page.content(&catalog).clone());
        let toggle_titles = (
            content.labels.language_toggle.clone(),
            content.labels.theme_toggle.clone(),
        );
        view! {
            <LanguageToggle language=language on_change=set_language title=toggle_titles.0 />
            <ThemeToggle theme=theme on_change=set_theme title=toggle_titles.1 />
            <DeckSections
                content=content
                cta=cta
                demo_url=catalog.demo_url.clone()
                site_url=catalog.site_url.clone()
            />
        }
    };

    view! {
        <ScrollArea class="deck">
            <main class="deck-main">{sections}</main>
        </ScrollArea>
    }
}

/// Sections in their fixed order.
#[component]
fn DeckSections(
    content: LocalizedContent,
    cta: CtaPolicy,
    demo_url: String,
    site_url: String,
) -> impl IntoView {
    let LocalizedContent {
        hero,
        labels,
        sections,
        cover_letter,
        problem_solution,
        products,
        revenue_streams,
        team,
        closing,
    } = content;

    let product_labels = labels.clone();
    let products = products
        .into_iter()
        .map(|product| {
            view! {
                <ProductCard
                    product=product
                    labels=product_labels.clone()
                    cta=cta
                    demo_url=demo_url.clone()
                />
            }
        })
        .collect_view();
    let streams = revenue_streams
        .into_iter()
        .map(|stream| view! { <RevenueModel stream=stream /> })
        .collect_view();

    view! {
        <Hero hero=hero site_url=site_url />
        <CoverLetterCard letter=cover_letter />
        <ProblemSolution
            copy=sections.problem_solution
            labels=labels.clone()
            content=problem_solution
        />
        <Section name="products" copy=sections.products>
            <div class="card-grid card-grid-3">{products}</div>
        </Section>
        <Section name="revenue-streams" copy=sections.revenue_streams>
            <div class="card-grid card-grid-3">{streams}</div>
        </Section>
        <TeamSection copy=sections.team labels=labels team=team />
        <ClosingStatement closing=closing />
    }
}
