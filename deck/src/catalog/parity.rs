//! Structural parity between the two languages of a catalog.
//!
//! Both languages must have the same number of records in every section and
//! the same number of entries inside each record; fields that do not depend
//! on the language (product names, logos, photos, accents, icons, link
//! presence) must agree. Only the strings differ.

use std::fmt;

use super::{Catalog, LocalizedContent};
use crate::model::Language;

/// One place where the two languages disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParityViolation {
    /// Dotted path, e.g. `products[2].features`
    pub path: String,
    /// What disagrees
    pub kind: ViolationKind,
}

/// Kind of a [`ParityViolation`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViolationKind {
    /// Collections of different length.
    Length {
        /// Length in the primary language
        primary: usize,
        /// Length in the secondary language
        secondary: usize,
    },
    /// A language-independent field differs.
    Mismatch,
}

impl fmt::Display for ParityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (primary, secondary) = (Language::ALL[0], Language::ALL[1]);
        match self.kind {
            ViolationKind::Length {
                primary: p,
                secondary: s,
            } => write!(
                f,
                "{}: {} entries in '{}' vs {} in '{}'",
                self.path, p, primary, s, secondary
            ),
            ViolationKind::Mismatch => write!(
                f,
                "{}: differs between '{}' and '{}'",
                self.path, primary, secondary
            ),
        }
    }
}

#[derive(Default)]
struct Checker {
    violations: Vec<ParityViolation>,
}

impl Checker {
    fn len(&mut self, path: impl Into<String>, primary: usize, secondary: usize) {
        if primary != secondary {
            self.violations.push(ParityViolation {
                path: path.into(),
                kind: ViolationKind::Length { primary, secondary },
            });
        }
    }

    fn same<T: PartialEq + ?Sized>(&mut self, path: impl Into<String>, primary: &T, secondary: &T) {
        if primary != secondary {
            self.violations.push(ParityViolation {
                path: path.into(),
                kind: ViolationKind::Mismatch,
            });
        }
    }
}

/// Every parity violation between the German and English copy.
pub(super) fn check(catalog: &Catalog) -> Vec<ParityViolation> {
    let mut c = Checker::default();
    compare(&mut c, &catalog.de, &catalog.en);
    c.violations
}

fn compare(c: &mut Checker, a: &LocalizedContent, b: &LocalizedContent) {
    c.len(
        "cover_letter.paragraphs",
        a.cover_letter.paragraphs.len(),
        b.cover_letter.paragraphs.len(),
    );

    let (pa, pb) = (&a.problem_solution, &b.problem_solution);
    c.len("problem_solution.problems", pa.problems.len(), pb.problems.len());
    c.len("problem_solution.solutions", pa.solutions.len(), pb.solutions.len());

    c.len("products", a.products.len(), b.products.len());
    for (i, (x, y)) in a.products.iter().zip(&b.products).enumerate() {
        c.len(format!("products[{i}].description"), x.description.len(), y.description.len());
        c.len(format!("products[{i}].features"), x.features.len(), y.features.len());
        c.len(format!("products[{i}].revenue"), x.revenue.len(), y.revenue.len());
        c.same(format!("products[{i}].title"), x.title.as_str(), y.title.as_str());
        c.same(format!("products[{i}].image"), x.image.as_str(), y.image.as_str());
        c.same(format!("products[{i}].accent"), &x.accent, &y.accent);
        c.same(format!("products[{i}].link"), &x.link.is_some(), &y.link.is_some());
    }

    c.len("revenue_streams", a.revenue_streams.len(), b.revenue_streams.len());
    for (i, (x, y)) in a.revenue_streams.iter().zip(&b.revenue_streams).enumerate() {
        c.len(format!("revenue_streams[{i}].items"), x.items.len(), y.items.len());
        c.same(format!("revenue_streams[{i}].icon"), &x.icon, &y.icon);
    }

    let (ta, tb) = (&a.team, &b.team);
    c.len("team.highlights", ta.highlights.len(), tb.highlights.len());
    for (i, (x, y)) in ta.highlights.iter().zip(&tb.highlights).enumerate() {
        c.same(format!("team.highlights[{i}].link"), &x.link.is_some(), &y.link.is_some());
    }
    c.len("team.members", ta.members.len(), tb.members.len());
    for (i, (x, y)) in ta.members.iter().zip(&tb.members).enumerate() {
        c.same(format!("team.members[{i}].photo"), x.photo.as_str(), y.photo.as_str());
    }
    c.len("team.advisors", ta.advisors.len(), tb.advisors.len());
}
