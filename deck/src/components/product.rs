//! Product cards.

use leptos::prelude::*;

use super::{
    Badge, Button, Card, CardContent, CardHeader, CardTitle, ICON_WARNING_CIRCLE, Icon, Tabs,
};
use crate::catalog::{Labels, Product};
use crate::model::{CallToAction, CtaPolicy, TabSet, call_to_action};

/// Tab selected when a card mounts.
pub const DEFAULT_PRODUCT_TAB: &str = "features";

/// The "features" / "revenue" tab set over any panel content.
pub fn product_tab_set<C>(labels: &Labels, features: C, revenue: C) -> TabSet<C> {
    TabSet::new(DEFAULT_PRODUCT_TAB)
        .panel("features", labels.features_tab.clone(), features)
        .panel("revenue", labels.revenue_tab.clone(), revenue)
}

/// Headed bullet list used by both product panels.
fn bullet_panel(heading: String, entries: Vec<String>) -> ViewFn {
    ViewFn::from(move || {
        view! {
            <div class="product-panel">
                <h4 class="panel-heading">{heading.clone()}</h4>
                <ul class="bullet-list">
                    {entries.iter().map(|entry| view! { <li>{entry.clone()}</li> }).collect_view()}
                </ul>
            </div>
        }
    })
}

/// Features and revenue model of one product, on two tabs.
///
/// Every card mounts its own instance, so cards switch tabs independently.
#[component]
pub fn FeaturesRevenueTabs(
    /// Tab labels and panel headings
    labels: Labels,
    /// Feature entries
    features: Vec<String>,
    /// Revenue model entries
    revenue: Vec<String>,
) -> impl IntoView {
    let tabs = product_tab_set(
        &labels,
        bullet_panel(labels.features_heading.clone(), features),
        bullet_panel(labels.revenue_heading.clone(), revenue),
    );

    view! { <Tabs tabs=tabs class="product-tabs" /> }
}

/// Logo, name, call to action, description and the feature/revenue tabs.
#[component]
pub fn ProductCard(
    /// Product record
    product: Product,
    /// Shared UI strings
    labels: Labels,
    /// How the header action is chosen
    #[prop(optional)]
    cta: CtaPolicy,
    /// Target of the "Test" button
    #[prop(into)]
    demo_url: String,
) -> impl IntoView {
    let action = match call_to_action(cta, &product, &demo_url) {
        CallToAction::TestLink { href } => {
            let href = href.to_string();
            let label = labels.test_button.clone();
            view! {
                <Button href=href class="test-button" data_role="product-test">
                    {label}
                </Button>
            }
            .into_any()
        }
        CallToAction::StatusBadge { status } => {
            let status = status.to_string();
            view! {
                <Badge class="status-badge">
                    <Icon path=ICON_WARNING_CIRCLE size="14" />
                    {status}
                </Badge>
            }
            .into_any()
        }
    };

    let Product {
        title,
        image,
        accent,
        description,
        features,
        revenue,
        ..
    } = product;
    let card_class = format!("product-card {}", accent.class());
    let alt = title.clone();

    view! {
        <Card class=card_class>
            <div class="product-visual">
                <img class="product-logo" src=image alt=alt />
            </div>
            <CardHeader class="product-header">
                <CardTitle class="product-title">{title}</CardTitle>
                {action}
            </CardHeader>
            <CardContent class="product-body">
                {description
                    .into_iter()
                    .map(|paragraph| view! { <p class="product-description">{paragraph}</p> })
                    .collect_view()}
                <FeaturesRevenueTabs labels=labels features=features revenue=revenue />
            </CardContent>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Accent, Catalog};
    use crate::components::render_html;
    use crate::model::Language;

    fn labels() -> Labels {
        Catalog::embedded().unwrap().get(Language::En).labels.clone()
    }

    fn product(link: Option<&str>) -> Product {
        Product {
            title: "Pooly".into(),
            status: "In Development".into(),
            image: "assets/logos/pooly.svg".into(),
            link: link.map(str::to_string),
            accent: Accent::Blue,
            description: vec!["Liquidity pools made simple.".into()],
            features: vec!["Simple Invest".into(), "Auto Rebalancing".into()],
            revenue: vec!["Performance Fee".into()],
        }
    }

    fn render_card(product: Product, cta: CtaPolicy) -> String {
        let labels = labels();
        render_html(move || {
            view! {
                <ProductCard
                    product=product
                    labels=labels
                    cta=cta
                    demo_url="https://audity.w3bots.de"
                />
            }
        })
    }

    #[test]
    fn always_test_link_shows_demo_link_without_product_link() {
        let html = render_card(product(None), CtaPolicy::AlwaysTestLink);

        assert!(html.contains(r#"href="https://audity.w3bots.de""#));
        assert!(html.contains(r#"data-role="product-test""#));
        assert!(html.contains(">Test</a>"));
        assert!(!html.contains("status-badge"));
    }

    #[test]
    fn default_policy_shows_badge_without_link() {
        let html = render_card(product(None), CtaPolicy::default());

        assert!(html.contains("status-badge"));
        assert!(html.contains("In Development"));
        assert!(!html.contains("product-test"));
    }

    #[test]
    fn default_policy_uses_own_link() {
        let html = render_card(product(Some("https://pooly.example")), CtaPolicy::default());

        assert!(html.contains(r#"href="https://pooly.example""#));
        assert!(html.contains(">Test</a>"));
        assert!(!html.contains("status-badge"));
        assert!(!html.contains("audity.w3bots.de"));
    }

    #[test]
    fn features_tab_is_open_by_default() {
        let html = render_card(product(None), CtaPolicy::default());

        assert!(html.contains("<li>Simple Invest</li>"));
        assert!(html.contains("<li>Auto Rebalancing</li>"));
        assert!(!html.contains("Performance Fee"));
        assert!(html.contains(r#"data-tab-trigger="revenue""#));
    }

    #[test]
    fn card_carries_accent_and_logo() {
        let html = render_card(product(None), CtaPolicy::default());

        assert!(html.contains("product-card accent-blue"));
        assert!(html.contains(r#"src="assets/logos/pooly.svg""#));
        assert!(html.contains(r#"alt="Pooly""#));
        assert!(html.contains("Liquidity pools made simple."));
    }

    #[test]
    fn product_tab_set_defaults_to_features() {
        let tabs = product_tab_set(&labels(), "f", "r");
        assert_eq!(tabs.selected(), DEFAULT_PRODUCT_TAB);
        assert_eq!(tabs.selected_panel().map(|p| p.content), Some("f"));
        assert!(tabs.contains("revenue"));
    }
}
