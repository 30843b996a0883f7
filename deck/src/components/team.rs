//! Team section: achievements, members and advisors.

use leptos::prelude::*;

use super::{Badge, Card, CardContent, Section};
use crate::catalog::{Advisor, Highlight, Labels, SectionCopy, Team, TeamMember};

/// Achievements list, member cards and advisor cards.
#[component]
pub fn TeamSection(
    /// Section title and subtitle
    copy: SectionCopy,
    /// Headings
    labels: Labels,
    /// Team data
    team: Team,
) -> impl IntoView {
    let Team {
        highlights,
        members,
        advisors,
    } = team;

    let advisors = (!advisors.is_empty()).then(|| {
        let heading = labels.advisors.clone();
        view! {
            <div class="team-block">
                <h3 class="team-heading">{heading}</h3>
                <div class="card-grid card-grid-3">
                    {advisors
                        .into_iter()
                        .map(|advisor| view! { <AdvisorCard advisor=advisor /> })
                        .collect_view()}
                </div>
            </div>
        }
    });

    view! {
        <Section name="team" copy=copy>
            <div class="team-block">
                <h3 class="team-heading">{labels.achievements}</h3>
                <ul class="highlight-list">
                    {highlights
                        .into_iter()
                        .map(|highlight| view! { <HighlightItem highlight=highlight /> })
                        .collect_view()}
                </ul>
            </div>
            <div class="team-block">
                <h3 class="team-heading">{labels.members}</h3>
                <div class="card-grid card-grid-3">
                    {members
                        .into_iter()
                        .map(|member| view! { <TeamMemberCard member=member /> })
                        .collect_view()}
                </div>
            </div>
            {advisors}
        </Section>
    }
}

/// Achievement, linked when it has a reference. Links open in a new
/// browsing context without an opener.
#[component]
fn HighlightItem(highlight: Highlight) -> impl IntoView {
    let Highlight { text, link } = highlight;
    match link {
        Some(link) => view! {
            <li>
                <a class="highlight-link" href=link target="_blank" rel="noopener noreferrer">
                    {text}
                </a>
            </li>
        }
        .into_any(),
        None => view! { <li>{text}</li> }.into_any(),
    }
}

/// Photo, name, role badge and bio.
#[component]
pub fn TeamMemberCard(member: TeamMember) -> impl IntoView {
    let alt = member.name.clone();
    view! {
        <Card class="member-card">
            <CardContent>
                <img class="member-photo" src=member.photo alt=alt />
                <h4 class="member-name">{member.name}</h4>
                <Badge class="member-role">{member.role}</Badge>
                <p class="member-description">{member.description}</p>
            </CardContent>
        </Card>
    }
}

/// Name, outlined role badge and a one-line bio.
#[component]
pub fn AdvisorCard(advisor: Advisor) -> impl IntoView {
    view! {
        <Card class="advisor-card">
            <CardContent>
                <h4 class="member-name">{advisor.name}</h4>
                <Badge class="badge-outline">{advisor.role}</Badge>
                <p class="advisor-description">{advisor.description}</p>
            </CardContent>
        </Card>
    }
}
