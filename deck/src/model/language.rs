//! Display language of the deck.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseEnumError;

/// The two languages every piece of copy is authored in.
///
/// German is the primary language (the catalog is written German-first),
/// English the secondary one. The page starts in English.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// German
    De,
    /// English
    #[default]
    En,
}

impl Language {
    /// Both languages, primary first.
    pub const ALL: [Language; 2] = [Language::De, Language::En];

    /// The other language. Toggling twice is the identity.
    pub fn toggled(self) -> Self {
        match self {
            Language::De => Language::En,
            Language::En => Language::De,
        }
    }

    /// ISO 639-1 code, also used as the `lang` attribute of the document.
    pub fn code(self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }

    /// Upper-case code shown on the language toggle.
    pub fn badge(self) -> &'static str {
        match self {
            Language::De => "DE",
            Language::En => "EN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "de" | "german" | "deutsch" => Ok(Language::De),
            "en" | "english" => Ok(Language::En),
            _ => Err(ParseEnumError::new("language", s, "de, en")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        for lang in Language::ALL {
            assert_ne!(lang.toggled(), lang);
            assert_eq!(lang.toggled().toggled(), lang);
        }
    }

    #[test]
    fn defaults_to_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("DE".parse::<Language>().unwrap(), Language::De);
        assert_eq!(" en ".parse::<Language>().unwrap(), Language::En);
        assert_eq!("deutsch".parse::<Language>().unwrap(), Language::De);

        let err = "fr".parse::<Language>().unwrap_err();
        assert!(err.to_string().contains("fr"));
        assert!(err.to_string().contains("de, en"));
    }

    #[test]
    fn serializes_as_lowercase_code() {
        assert_eq!(serde_json::to_string(&Language::De).unwrap(), "\"de\"");
        assert_eq!(serde_json::from_str::<Language>("\"en\"").unwrap(), Language::En);
    }
}
