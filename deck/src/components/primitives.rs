//! Styled building blocks every composite is assembled from.
//!
//! Primitives never see the theme. They carry fixed class names and the
//! stylesheet resolves colors from the `light`/`dark` class on `<html>`.

use leptos::prelude::*;

/// Join a base class with optional caller classes.
pub(crate) fn classes(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

/// Rounded, bordered surface.
#[component]
pub fn Card(
    /// Additional CSS class names
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=classes("card", &class)>{children()}</div> }
}

/// Top area of a [`Card`].
#[component]
pub fn CardHeader(
    /// Additional CSS class names
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=classes("card-header", &class)>{children()}</div> }
}

/// Heading of a [`Card`].
#[component]
pub fn CardTitle(
    /// Additional CSS class names
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <h3 class=classes("card-title", &class)>{children()}</h3> }
}

/// Body of a [`Card`].
#[component]
pub fn CardContent(
    /// Additional CSS class names
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=classes("card-content", &class)>{children()}</div> }
}

/// Small pill label.
#[component]
pub fn Badge(
    /// Additional CSS class names
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <span class=classes("badge", &class)>{children()}</span> }
}

/// Visual weight of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled
    #[default]
    Primary,
    /// Transparent with a border
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button button-primary",
            ButtonVariant::Outline => "button button-outline",
        }
    }
}

/// Button, or a button-styled link when `href` is set.
///
/// Links open in a new browsing context.
#[component]
pub fn Button(
    /// Visual weight
    #[prop(optional)]
    variant: ButtonVariant,
    /// Link target; renders an `<a>` instead of a `<button>`
    #[prop(optional, into)]
    href: Option<String>,
    /// Tooltip
    #[prop(optional, into)]
    title: Option<String>,
    /// `data-role` hook for scripts and tests
    #[prop(optional)]
    data_role: Option<&'static str>,
    /// Click handler (buttons only)
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Additional CSS class names
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let class = classes(variant.class(), &class);
    match href {
        Some(href) => view! {
            <a
                class=class
                href=href
                target="_blank"
                rel="noopener noreferrer"
                title=title
                data-role=data_role
            >
                {children()}
            </a>
        }
        .into_any(),
        None => view! {
            <button
                type="button"
                class=class
                title=title
                data-role=data_role
                on:click=move |_| {
                    if let Some(on_click) = &on_click {
                        on_click.run(());
                    }
                }
            >
                {children()}
            </button>
        }
        .into_any(),
    }
}

/// Bounded, scrollable region.
#[component]
pub fn ScrollArea(
    /// Additional CSS class names
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=classes("scroll-area", &class)>
            <div class="scroll-area-viewport">{children()}</div>
        </div>
    }
}
