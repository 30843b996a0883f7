//! Floating language and theme switches.
//!
//! Both are controlled: they show the value they are given and ask the
//! owner for the flipped value on click.

use leptos::prelude::*;

use super::{Button, ButtonVariant, ICON_GLOBE, ICON_MOON, ICON_SUN, Icon};
use crate::model::{Language, Theme};

/// Globe button labelled with the active language code.
#[component]
pub fn LanguageToggle(
    /// Active language
    #[prop(into)]
    language: Signal<Language>,
    /// Receives the other language
    on_change: Callback<Language>,
    /// Tooltip
    #[prop(optional, into)]
    title: String,
) -> impl IntoView {
    let flip = Callback::new(move |()| on_change.run(language.get_untracked().toggled()));

    view! {
        <Button
            variant=ButtonVariant::Outline
            class="floating-toggle language-toggle"
            title=title
            data_role="language-toggle"
            on_click=flip
        >
            <Icon path=ICON_GLOBE />
            <span class="toggle-label">{move || language.get().badge()}</span>
        </Button>
    }
}

/// Sun/moon button.
///
/// Both icons are rendered and the stylesheet shows the one matching the
/// class on `<html>`: a moon while light, a sun while dark. That keeps the
/// icon right when a static page flips the class without re-rendering.
#[component]
pub fn ThemeToggle(
    /// Active theme
    #[prop(into)]
    theme: Signal<Theme>,
    /// Receives the other theme
    on_change: Callback<Theme>,
    /// Tooltip
    #[prop(optional, into)]
    title: String,
) -> impl IntoView {
    let flip = Callback::new(move |()| on_change.run(theme.get_untracked().toggled()));

    view! {
        <Button
            variant=ButtonVariant::Outline
            class="floating-toggle theme-toggle"
            title=title
            data_role="theme-toggle"
            on_click=flip
        >
            <Icon path=ICON_MOON class="theme-icon-light" />
            <Icon path=ICON_SUN class="theme-icon-dark" />
        </Button>
    }
}
