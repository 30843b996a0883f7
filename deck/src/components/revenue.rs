//! Revenue stream columns.

use leptos::prelude::*;

use super::{Card, CardContent, ICON_CARET_RIGHT, ICON_LIGHTNING, ICON_REPEAT, ICON_USERS, Icon};
use crate::catalog::{RevenueStream, StreamIcon};
use crate::model::split_bold_prefix;

fn stream_icon(icon: StreamIcon) -> &'static str {
    match icon {
        StreamIcon::Bolt => ICON_LIGHTNING,
        StreamIcon::Users => ICON_USERS,
        StreamIcon::Repeat => ICON_REPEAT,
    }
}

/// One revenue stream: icon, title and its "Lead: description" items.
#[component]
pub fn RevenueModel(stream: RevenueStream) -> impl IntoView {
    let icon = stream_icon(stream.icon);

    view! {
        <Card class="revenue-card">
            <CardContent class="revenue-content">
                <div class="revenue-header">
                    <Icon path=icon class="muted-icon" />
                    <h3 class="revenue-title">{stream.title}</h3>
                </div>
                <ul class="revenue-items">
                    {stream
                        .items
                        .into_iter()
                        .map(|item| view! { <RevenueItem item=item /> })
                        .collect_view()}
                </ul>
            </CardContent>
        </Card>
    }
}

/// Bold lead, then the description on its own line. Items without a colon
/// show only the lead.
#[component]
fn RevenueItem(item: String) -> impl IntoView {
    let split = split_bold_prefix(&item);
    let lead = match split.rest {
        Some(_) => format!("{}:", split.lead),
        None => split.lead.to_string(),
    };
    let rest = split
        .rest
        .filter(|rest| !rest.trim().is_empty())
        .map(str::to_string);

    view! {
        <li class="revenue-item">
            <Icon path=ICON_CARET_RIGHT size="16" class="muted-icon" />
            <div>
                <strong>{lead}</strong>
                {rest.map(|rest| view! {
                    <br />
                    <span class="muted">{rest}</span>
                })}
            </div>
        </li>
    }
}
