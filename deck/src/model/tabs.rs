//! Declarative single-select tab model.
//!
//! A [`TabSet`] is an ordered list of named panels plus the name of the
//! selected one. The [`Tabs`](crate::components::Tabs) component keeps one
//! private instance per mounted tab strip, so two cards never share a
//! selection.
//!
//! ```rust
//! use pitchdeck::model::TabSet;
//!
//! let mut tabs = TabSet::new("features")
//!     .panel("features", "Features", "feature list")
//!     .panel("revenue", "Revenue Model", "revenue list");
//!
//! assert_eq!(tabs.selected_panel().map(|p| p.content), Some("feature list"));
//!
//! tabs.select("revenue");
//! assert_eq!(tabs.selected_panel().map(|p| p.content), Some("revenue list"));
//!
//! // Unknown names are accepted and render nothing.
//! tabs.select("pricing");
//! assert!(tabs.selected_panel().is_none());
//! ```

/// One named panel: the trigger label and the content it reveals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabPanel<C> {
    /// Panel name, matched against the selection
    pub name: String,
    /// Text shown on the trigger
    pub label: String,
    /// Panel body
    pub content: C,
}

/// Trigger view of a panel, as the tab strip renders it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trigger<'a> {
    /// Panel name the trigger selects
    pub name: &'a str,
    /// Text shown on the trigger
    pub label: &'a str,
    /// Whether this trigger's panel is the selected one
    pub active: bool,
}

/// Ordered panels with exactly one selected name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabSet<C> {
    panels: Vec<TabPanel<C>>,
    selected: String,
}

impl<C> TabSet<C> {
    /// Empty tab set whose selection starts at `default_selected`.
    pub fn new(default_selected: impl Into<String>) -> Self {
        Self {
            panels: Vec::new(),
            selected: default_selected.into(),
        }
    }

    /// Append a panel.
    pub fn panel(mut self, name: impl Into<String>, label: impl Into<String>, content: C) -> Self {
        self.panels.push(TabPanel {
            name: name.into(),
            label: label.into(),
            content,
        });
        self
    }

    /// Select `name`. Not validated: an unknown name leaves no panel shown.
    pub fn select(&mut self, name: impl Into<String>) {
        self.selected = name.into();
    }

    /// Currently selected name.
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Whether `name` is the current selection.
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected == name
    }

    /// Whether a panel called `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.panels.iter().any(|p| p.name == name)
    }

    /// The panel to render: the first one named like the selection.
    pub fn selected_panel(&self) -> Option<&TabPanel<C>> {
        self.panels.iter().find(|p| p.name == self.selected)
    }

    /// All panels in declaration order.
    pub fn panels(&self) -> &[TabPanel<C>] {
        &self.panels
    }

    /// One trigger per panel, in declaration order.
    pub fn triggers(&self) -> impl Iterator<Item = Trigger<'_>> + '_ {
        self.panels.iter().map(|p| Trigger {
            name: &p.name,
            label: &p.label,
            active: p.name == self.selected,
        })
    }
}
