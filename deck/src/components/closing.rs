//! Closing statement.

use leptos::prelude::*;

use super::{Card, CardContent, CardHeader, CardTitle};
use crate::catalog::Closing;

/// Large centered title over the closing text.
#[component]
pub fn ClosingStatement(closing: Closing) -> impl IntoView {
    view! {
        <section class="deck-section closing" data-section="closing">
            <Card class="section-card">
                <CardHeader class="section-header">
                    <CardTitle class="section-title">{closing.title}</CardTitle>
                </CardHeader>
                <CardContent class="closing-body">{closing.body}</CardContent>
            </Card>
        </section>
    }
}
