//! Configuration file support for pitchdeck.
//!
//! Loads an optional `pitchdeck.toml`. Command-line flags win over the file,
//! the file wins over built-in defaults.

use std::path::{Path, PathBuf};

use pitchdeck::model::{CtaPolicy, Language, Theme};
use serde::Deserialize;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "pitchdeck.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Catalog JSON file; relative paths resolve against the config file
    pub catalog: Option<PathBuf>,
    /// Log level used when neither `--log-level` nor `RUST_LOG` is set
    pub log_level: Option<String>,
    /// Defaults for `pitchdeck render`
    pub render: RenderConfig,
}

/// `[render]` table
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Page language
    pub language: Option<Language>,
    /// Initial theme
    pub theme: Option<Theme>,
    /// Product card call-to-action policy
    pub cta: Option<CtaPolicy>,
    /// Output file; relative paths resolve against the working directory
    pub out: Option<PathBuf>,
    /// Write one file per language
    pub all_languages: bool,
}

impl DeckConfig {
    /// Load `pitchdeck.toml` from the given directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(dir: &Path) -> Self {
        Self::load_from_path(&dir.join(DEFAULT_CONFIG_FILE))
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let config: Self = match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("[pitchdeck][warn] Failed to parse {}: {}", path.display(), e);
                    return Self::default();
                }
            },
            Err(e) => {
                eprintln!("[pitchdeck][warn] Failed to read {}: {}", path.display(), e);
                return Self::default();
            }
        };
        config.relative_to(path.parent().unwrap_or(Path::new("")))
    }

    fn relative_to(mut self, base: &Path) -> Self {
        if let Some(catalog) = self.catalog.take() {
            self.catalog = Some(if catalog.is_relative() {
                base.join(catalog)
            } else {
                catalog
            });
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, body: &str) -> PathBuf {
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(file, "{body}").expect("write config");
        path
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        assert_eq!(DeckConfig::load(temp.path()), DeckConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        write_config(
            &temp,
            r#"
catalog = "content/catalog.json"
log_level = "debug"

[render]
language = "de"
theme = "light"
cta = "always-test-link"
out = "dist/deck.html"
all_languages = true
"#,
        );

        let config = DeckConfig::load(temp.path());
        assert_eq!(
            config,
            DeckConfig {
                catalog: Some(temp.path().join("content/catalog.json")),
                log_level: Some("debug".into()),
                render: RenderConfig {
                    language: Some(Language::De),
                    theme: Some(Theme::Light),
                    cta: Some(CtaPolicy::AlwaysTestLink),
                    out: Some(PathBuf::from("dist/deck.html")),
                    all_languages: true,
                },
            }
        );
    }

    #[test]
    fn test_absolute_catalog_path_is_kept() {
        let temp = TempDir::new().expect("temp dir");
        let catalog = temp.path().join("elsewhere.json");
        write_config(&temp, &format!("catalog = {:?}", catalog.display().to_string()));

        let config = DeckConfig::load(temp.path());
        assert_eq!(config.catalog, Some(catalog));
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().expect("temp dir");
        write_config(&temp, "[render]\ntheme = \"dark\"");

        let config = DeckConfig::load(temp.path());
        assert_eq!(config.render.theme, Some(Theme::Dark));
        assert_eq!(config.render.language, None);
        assert_eq!(config.catalog, None);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let temp = TempDir::new().expect("temp dir");
        write_config(&temp, "[render]\nlanguage = \"fr\"");

        assert_eq!(DeckConfig::load(temp.path()), DeckConfig::default());
    }

    #[test]
    fn test_load_empty_config() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::File::create(temp.path().join(DEFAULT_CONFIG_FILE)).expect("create empty config");

        assert_eq!(DeckConfig::load(temp.path()), DeckConfig::default());
    }
}
