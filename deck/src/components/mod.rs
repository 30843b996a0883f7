//! Leptos components of the deck.
//!
//! Primitives are styled building blocks that know nothing about content.
//! Composites bind one localized record each onto primitives. [`DeckPage`]
//! owns the page state and lays the composites out in a fixed order.
//!
//! # Component Hierarchy
//!
//! ```text
//! DeckDocument (static export shell)
//! └── DeckPage
//!     ├── LanguageToggle / ThemeToggle
//!     ├── Hero
//!     ├── CoverLetterCard
//!     ├── ProblemSolution
//!     │   └── Tabs: PainPoint* | Solution*
//!     ├── Section: products
//!     │   └── ProductCard*
//!     │       └── FeaturesRevenueTabs
//!     ├── Section: revenue streams
//!     │   └── RevenueModel*
//!     ├── TeamSection
//!     │   ├── TeamMemberCard*
//!     │   └── AdvisorCard*
//!     └── ClosingStatement
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use leptos::prelude::*;
//! use pitchdeck::{catalog::Catalog, components::DeckPage, model::Language};
//!
//! let catalog = Arc::new(Catalog::embedded()?);
//! view! { <DeckPage catalog=catalog language=Language::De /> }
//! ```

mod closing;
mod cover_letter;
mod document;
mod hero;
mod icons;
mod page;
mod primitives;
mod problem_solution;
mod product;
mod revenue;
mod section;
mod tabs;
mod team;
mod toggles;

pub use closing::ClosingStatement;
pub use cover_letter::CoverLetterCard;
pub use document::{DeckDocument, THEME_SCRIPT};
pub use hero::Hero;
pub use icons::*;
pub use page::DeckPage;
pub use primitives::{Badge, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, ScrollArea};
pub use problem_solution::{
    DEFAULT_PROBLEM_SOLUTION_TAB, PainPoint, ProblemSolution, Solution, problem_solution_tab_set,
};
pub use product::{DEFAULT_PRODUCT_TAB, FeaturesRevenueTabs, ProductCard, product_tab_set};
pub use revenue::RevenueModel;
pub use section::Section;
pub use tabs::Tabs;
pub use team::{AdvisorCard, TeamMemberCard, TeamSection};
pub use toggles::{LanguageToggle, ThemeToggle};

/// Render a view to HTML inside a fresh reactive owner.
#[cfg(test)]
pub(crate) fn render_html<V: leptos::prelude::IntoView>(view: impl FnOnce() -> V) -> String {
    use leptos::prelude::Owner;
    use leptos::tachys::view::RenderHtml;

    Owner::new().with(|| view().to_html())
}
