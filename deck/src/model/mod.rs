//! UI state model, independent of any rendering runtime.
//!
//! - [`Language`] / [`Theme`] - the two page-wide toggles
//! - [`PageController`] - owns both toggles and applies the theme
//! - [`TabSet`] - the single-select tab model behind every tab strip
//! - [`split_bold_prefix`] - "Lead: description" list items
//! - [`call_to_action`] - product card header action

mod cta;
mod language;
mod page;
mod tabs;
mod text;
mod theme;

pub use cta::{CallToAction, CtaPolicy, call_to_action};
pub use language::Language;
pub use page::PageController;
pub use tabs::{TabPanel, TabSet, Trigger};
pub use text::{BoldPrefix, split_bold_prefix};
pub use theme::{ApplyTheme, NoopTheme, THEME_ATTRIBUTE, Theme};
