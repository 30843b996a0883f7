//! Serde records of the content catalog.
//!
//! Every record is plain owned data so components can clone what they bind
//! without borrowing from the catalog.

use serde::{Deserialize, Serialize};

use crate::model::Language;

/// All copy of the deck, once per language.
///
/// One field per [`Language`], so every language always has content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Target of the product cards' "Test" button
    pub demo_url: String,
    /// Company site, linked from the hero background
    pub site_url: String,
    /// German copy
    pub de: LocalizedContent,
    /// English copy
    pub en: LocalizedContent,
}

impl Catalog {
    /// Copy for `language`.
    pub fn get(&self, language: Language) -> &LocalizedContent {
        match language {
            Language::De => &self.de,
            Language::En => &self.en,
        }
    }
}

/// Every section's copy in one language.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocalizedContent {
    /// Title banner
    pub hero: Hero,
    /// Short UI strings (tab labels, headings, toggle titles)
    pub labels: Labels,
    /// Section titles and subtitles
    pub sections: Sections,
    /// Investor cover letter
    pub cover_letter: CoverLetter,
    /// Problems and the matching solutions
    pub problem_solution: ProblemSolution,
    /// Product cards, in display order
    pub products: Vec<Product>,
    /// Revenue stream columns, in display order
    pub revenue_streams: Vec<RevenueStream>,
    /// Team highlights, members and advisors
    pub team: Team,
    /// Closing statement
    pub closing: Closing,
}

/// Title banner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    /// Small line above the headline
    pub kicker: String,
    /// Headline
    pub headline: String,
}

/// Short UI strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Labels {
    /// Product card tab: features
    pub features_tab: String,
    /// Product card tab: revenue model
    pub revenue_tab: String,
    /// Heading inside the features panel
    pub features_heading: String,
    /// Heading inside the revenue panel
    pub revenue_heading: String,
    /// Problem/solution tab: problems
    pub problem_tab: String,
    /// Problem/solution tab: solutions
    pub solution_tab: String,
    /// Team section: highlights heading
    pub achievements: String,
    /// Team section: members heading
    pub members: String,
    /// Team section: advisors heading
    pub advisors: String,
    /// Product card "Test" button
    pub test_button: String,
    /// Tooltip of the language toggle
    pub language_toggle: String,
    /// Tooltip of the theme toggle
    pub theme_toggle: String,
}

/// Title and subtitle of a page section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionCopy {
    /// Large title
    pub title: String,
    /// Muted line above the title
    pub subtitle: String,
}

/// Section headers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sections {
    /// Problem & solution
    pub problem_solution: SectionCopy,
    /// Products
    pub products: SectionCopy,
    /// Revenue streams
    pub revenue_streams: SectionCopy,
    /// Team
    pub team: SectionCopy,
}

/// Investor cover letter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoverLetter {
    /// Salutation
    pub title: String,
    /// Body paragraphs
    pub paragraphs: Vec<String>,
    /// Sign-off line
    pub closing: String,
}

/// A titled statement (pain point or solution).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Bold title
    pub title: String,
    /// Body text
    pub description: String,
}

/// Problems and solutions, shown on two tabs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProblemSolution {
    /// Pain points
    pub problems: Vec<Point>,
    /// Solutions
    pub solutions: Vec<Point>,
}

/// Accent color of a product card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    /// Green
    Green,
    /// Cyan
    Cyan,
    /// Yellow
    Yellow,
    /// Indigo
    Indigo,
    /// Blue
    Blue,
    /// Red
    Red,
}

impl Accent {
    /// CSS modifier class (`accent-green`, ...).
    pub fn class(self) -> &'static str {
        match self {
            Accent::Green => "accent-green",
            Accent::Cyan => "accent-cyan",
            Accent::Yellow => "accent-yellow",
            Accent::Indigo => "accent-indigo",
            Accent::Blue => "accent-blue",
            Accent::Red => "accent-red",
        }
    }
}

/// One product card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product name
    pub title: String,
    /// Development status ("In Testing", ...)
    pub status: String,
    /// Logo reference (opaque path or URL)
    pub image: String,
    /// The product's own link, if it has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Card accent color
    pub accent: Accent,
    /// Description paragraphs
    pub description: Vec<String>,
    /// Entries of the features tab
    pub features: Vec<String>,
    /// Entries of the revenue model tab
    pub revenue: Vec<String>,
}

/// Icon of a revenue stream column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamIcon {
    /// Lightning bolt
    Bolt,
    /// People
    Users,
    /// Circular arrows
    Repeat,
}

/// One revenue stream column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevenueStream {
    /// Column title
    pub title: String,
    /// Header icon
    pub icon: StreamIcon,
    /// "Lead: description" items
    pub items: Vec<String>,
}

/// A team achievement, optionally linking to a reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    /// Achievement text
    pub text: String,
    /// Outbound reference, opened in a new browsing context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A core team member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Full name
    pub name: String,
    /// Role badge
    pub role: String,
    /// Bio
    pub description: String,
    /// Photo reference (opaque path or URL)
    pub photo: String,
}

/// An advisor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Advisor {
    /// Full name
    pub name: String,
    /// Role badge
    pub role: String,
    /// One-line bio
    pub description: String,
}

/// Team section data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Achievements list
    pub highlights: Vec<Highlight>,
    /// Core team
    pub members: Vec<TeamMember>,
    /// Advisors
    #[serde(default)]
    pub advisors: Vec<Advisor>,
}

/// Closing statement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Closing {
    /// Title
    pub title: String,
    /// Body text
    pub body: String,
}
