//! Tab strip over a [`TabSet`].

use leptos::prelude::*;

use super::primitives::classes;
use crate::model::TabSet;

/// Single-select tab strip.
///
/// Each mounted instance keeps its own copy of `tabs` in a private signal,
/// so selecting a tab here never changes another strip. Every trigger is
/// rendered; only the selected panel's content is.
#[component]
pub fn Tabs(
    /// Panels in trigger order, with the initially selected name
    tabs: TabSet<ViewFn>,
    /// Additional CSS class names
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    view! { <TabStrip state=RwSignal::new(tabs) class=class /> }
}

/// Triggers and the selected panel of one strip's state.
#[component]
fn TabStrip(
    state: RwSignal<TabSet<ViewFn>>,
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let triggers = state.with_untracked(|set| {
        set.triggers()
            .map(|t| (t.name.to_string(), t.label.to_string()))
            .collect::<Vec<_>>()
    });

    let panel = move || {
        let selected = state.with(|set| {
            set.selected_panel()
                .map(|panel| (panel.name.clone(), panel.content.clone()))
        });
        selected.map(|(name, content)| {
            view! {
                <div class="tab-panel" role="tabpanel" data-tab-panel=name>
                    {content.run()}
                </div>
            }
        })
    };

    view! {
        <div class=classes("tabs", &class)>
            <div class="tab-list" role="tablist">
                {triggers
                    .into_iter()
                    .map(|(name, label)| view! { <TabTrigger state=state name=name label=label /> })
                    .collect_view()}
            </div>
            {panel}
        </div>
    }
}

#[component]
fn TabTrigger(state: RwSignal<TabSet<ViewFn>>, name: String, label: String) -> impl IntoView {
    let active = {
        let name = name.clone();
        Memo::new(move |_| state.with(|set| set.is_selected(&name)))
    };
    let target = name.clone();

    view! {
        <button
            type="button"
            role="tab"
            class=move || if active.get() { "tab-trigger active" } else { "tab-trigger" }
            aria-selected=move || active.get().to_string()
            data-tab-trigger=name
            on:click=move |_| state.update(|set| set.select(target.clone()))
        >
            {label}
        </button>
    }
}
