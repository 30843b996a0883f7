//! Light/dark presentation mode and the effect that applies it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseEnumError;

/// Name of the root-scope attribute the theme is written to.
///
/// Stylesheets key off `html.light` / `html.dark`.
pub const THEME_ATTRIBUTE: &str = "class";

/// Presentation mode of the whole page. The page starts dark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background, dark text
    Light,
    /// Dark background, light text
    #[default]
    Dark,
}

impl Theme {
    /// Both themes.
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// The other theme. Toggling twice is the identity.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Attribute value written to the root scope.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ParseEnumError::new("theme", s, "light, dark")),
        }
    }
}

/// Applies a theme to the rendering surface's root scope.
///
/// The page controller calls this once on mount and once per actual theme
/// change. In the browser it writes `document.documentElement`; static
/// rendering bakes the value into the `<html>` tag instead and uses
/// [`NoopTheme`].
pub trait ApplyTheme: Send + Sync + 'static {
    /// Write `theme` to the root scope.
    fn apply(&self, theme: Theme);
}

impl<F> ApplyTheme for F
where
    F: Fn(Theme) + Send + Sync + 'static,
{
    fn apply(&self, theme: Theme) {
        self(theme)
    }
}

/// Applier for hosts that write the root attribute themselves.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTheme;

impl ApplyTheme for NoopTheme {
    fn apply(&self, _theme: Theme) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        for theme in Theme::ALL {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn defaults_to_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::default().as_str(), "dark");
    }

    #[test]
    fn parses_names() {
        assert_eq!("Light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
    }
}
