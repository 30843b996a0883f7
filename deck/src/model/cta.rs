//! Call-to-action shown in a product card header.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::ParseEnumError;

/// How product cards pick their call to action.
///
/// The deck as shipped shows the "Test" button only on cards whose product
/// carries a non-empty link, and the status badge on every other card.
/// [`CtaPolicy::AlwaysTestLink`] is the opt-in alternative: a "Test" button
/// to the catalog's demo URL on every card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CtaPolicy {
    /// Product link when present, status badge otherwise
    #[default]
    LinkOrStatus,
    /// "Test" button to the demo URL on every card
    AlwaysTestLink,
}

impl fmt::Display for CtaPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CtaPolicy::AlwaysTestLink => "always-test-link",
            CtaPolicy::LinkOrStatus => "link-or-status",
        })
    }
}

impl FromStr for CtaPolicy {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always-test-link" => Ok(CtaPolicy::AlwaysTestLink),
            "link-or-status" => Ok(CtaPolicy::LinkOrStatus),
            _ => Err(ParseEnumError::new(
                "cta policy",
                s,
                "always-test-link, link-or-status",
            )),
        }
    }
}

/// Resolved call to action for one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallToAction<'a> {
    /// "Test" button opening `href` in a new browsing context
    TestLink {
        /// Link target
        href: &'a str,
    },
    /// Plain status badge
    StatusBadge {
        /// Status text
        status: &'a str,
    },
}

/// Resolve the call to action of `product` under `policy`.
pub fn call_to_action<'a>(
    policy: CtaPolicy,
    product: &'a Product,
    demo_url: &'a str,
) -> CallToAction<'a> {
    match policy {
        CtaPolicy::AlwaysTestLink => CallToAction::TestLink { href: demo_url },
        CtaPolicy::LinkOrStatus => match product.link.as_deref().filter(|l| !l.is_empty()) {
            Some(href) => CallToAction::TestLink { href },
            None => CallToAction::StatusBadge {
                status: &product.status,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Accent;

    fn product(link: Option<&str>) -> Product {
        Product {
            title: "Swapy".into(),
            status: "In Testing".into(),
            image: "assets/logos/swapy.svg".into(),
            link: link.map(Into::into),
            accent: Accent::Cyan,
            description: vec!["DEX aggregation".into()],
            features: vec![],
            revenue: vec![],
        }
    }

    #[test]
    fn default_policy_badges_products_without_a_link() {
        assert_eq!(CtaPolicy::default(), CtaPolicy::LinkOrStatus);
        assert_eq!(
            call_to_action(CtaPolicy::default(), &product(None), "https://demo.example"),
            CallToAction::StatusBadge {
                status: "In Testing"
            }
        );
        let linked = product(Some("https://swapy.example"));
        assert_eq!(
            call_to_action(CtaPolicy::default(), &linked, "https://demo.example"),
            CallToAction::TestLink {
                href: "https://swapy.example"
            }
        );
    }

    #[test]
    fn always_test_link_links_every_card_to_the_demo() {
        let demo = "https://demo.example";
        for p in [product(None), product(Some("https://swapy.example"))] {
            assert_eq!(
                call_to_action(CtaPolicy::AlwaysTestLink, &p, demo),
                CallToAction::TestLink { href: demo }
            );
        }
    }

    #[test]
    fn link_or_status_uses_the_product_link() {
        let p = product(Some("https://swapy.example"));
        assert_eq!(
            call_to_action(CtaPolicy::LinkOrStatus, &p, "https://demo.example"),
            CallToAction::TestLink {
                href: "https://swapy.example"
            }
        );
    }

    #[test]
    fn link_or_status_falls_back_to_the_badge() {
        for p in [product(None), product(Some(""))] {
            assert_eq!(
                call_to_action(CtaPolicy::LinkOrStatus, &p, "https://demo.example"),
                CallToAction::StatusBadge {
                    status: "In Testing"
                }
            );
        }
    }

    #[test]
    fn parses_kebab_case_names() {
        assert_eq!(
            "link-or-status".parse::<CtaPolicy>().unwrap(),
            CtaPolicy::LinkOrStatus
        );
        assert_eq!(
            CtaPolicy::AlwaysTestLink.to_string().parse::<CtaPolicy>().unwrap(),
            CtaPolicy::AlwaysTestLink
        );
        assert!("sometimes".parse::<CtaPolicy>().is_err());
    }
}
