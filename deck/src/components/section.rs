//! Titled page section.

use leptos::prelude::*;

use super::{Card, CardContent, CardHeader, CardTitle};
use crate::catalog::SectionCopy;

/// Borderless card with a muted subtitle above a large title.
#[component]
pub fn Section(
    /// `data-section` marker, also the anchor id
    name: &'static str,
    /// Title and subtitle
    copy: SectionCopy,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="deck-section" id=name data-section=name>
            <Card class="section-card">
                <CardHeader class="section-header">
                    <span class="section-subtitle">{copy.subtitle}</span>
                    <CardTitle class="section-title">{copy.title}</CardTitle>
                </CardHeader>
                <CardContent>{children()}</CardContent>
            </Card>
        </section>
    }
}
