//! Problems and solutions on two tabs.

use leptos::prelude::*;

use super::{ICON_CHECK_CIRCLE, ICON_X_CIRCLE, Icon, Section, Tabs};
use crate::catalog::{Labels, Point, ProblemSolution as ProblemSolutionCopy, SectionCopy};
use crate::model::TabSet;

/// Tab selected when the section mounts.
pub const DEFAULT_PROBLEM_SOLUTION_TAB: &str = "problem";

/// The "problem" / "solution" tab set over any panel content.
pub fn problem_solution_tab_set<C>(labels: &Labels, problems: C, solutions: C) -> TabSet<C> {
    TabSet::new(DEFAULT_PROBLEM_SOLUTION_TAB)
        .panel("problem", labels.problem_tab.clone(), problems)
        .panel("solution", labels.solution_tab.clone(), solutions)
}

/// Section with a pain-point tab and a solution tab.
#[component]
pub fn ProblemSolution(
    /// Section title and subtitle
    copy: SectionCopy,
    /// Tab labels
    labels: Labels,
    /// Problems and solutions
    content: ProblemSolutionCopy,
) -> impl IntoView {
    let ProblemSolutionCopy {
        problems,
        solutions,
    } = content;

    let problems = ViewFn::from(move || {
        view! {
            <div class="point-list">
                {problems
                    .iter()
                    .cloned()
                    .map(|point| view! { <PainPoint point=point /> })
                    .collect_view()}
            </div>
        }
    });
    let solutions = ViewFn::from(move || {
        view! {
            <div class="point-list">
                {solutions
                    .iter()
                    .cloned()
                    .map(|point| view! { <Solution point=point /> })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <Section name="problem-solution" copy=copy>
            <Tabs tabs=problem_solution_tab_set(&labels, problems, solutions) class="tabs-wide" />
        </Section>
    }
}

/// A problem, marked with a red cross.
#[component]
pub fn PainPoint(point: Point) -> impl IntoView {
    view! {
        <div class="point pain-point">
            <Icon path=ICON_X_CIRCLE size="24" class="point-icon" />
            <div>
                <h4 class="point-title">{point.title}</h4>
                <p class="point-description">{point.description}</p>
            </div>
        </div>
    }
}

/// A solution, marked with a green check.
#[component]
pub fn Solution(point: Point) -> impl IntoView {
    view! {
        <div class="point solution">
            <Icon path=ICON_CHECK_CIRCLE size="24" class="point-icon" />
            <div>
                <h4 class="point-title">{point.title}</h4>
                <p class="point-description">{point.description}</p>
            </div>
        </div>
    }
}
