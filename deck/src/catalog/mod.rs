//! Language-keyed content catalog.
//!
//! All copy lives in one JSON document with a German and an English slice.
//! The document shipped with the crate is compiled in and available through
//! [`Catalog::embedded`]; [`Catalog::load`] reads a replacement from disk.
//!
//! ```rust
//! use pitchdeck::catalog::Catalog;
//! use pitchdeck::model::Language;
//!
//! let catalog = Catalog::embedded().unwrap();
//! catalog.validate().unwrap();
//!
//! let en = catalog.get(Language::En);
//! assert_eq!(en.products.len(), catalog.get(Language::De).products.len());
//! ```

mod parity;
mod types;

use std::path::Path;

pub use parity::{ParityViolation, ViolationKind};
pub use types::*;

use crate::error::CatalogError;

/// The catalog compiled into the crate.
pub const EMBEDDED_CATALOG: &str = include_str!("../../content/catalog.json");

impl Catalog {
    /// Parse the compiled-in catalog.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Parse a catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Every place where the two languages are out of parity.
    pub fn parity_violations(&self) -> Vec<ParityViolation> {
        parity::check(self)
    }

    /// Fail with [`CatalogError::Parity`] unless both languages have the same shape.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let violations = self.parity_violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Parity(violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::model::Language;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = Catalog::embedded().expect("embedded catalog");
        assert_eq!(catalog.get(Language::En).products.len(), 6);
        assert_eq!(catalog.get(Language::De).hero.headline, "Bewerbung 2024");
        assert!(catalog.demo_url.starts_with("https://"));
    }

    #[test]
    fn only_the_first_product_has_its_own_link() {
        let catalog = Catalog::embedded().unwrap();
        let linked: Vec<_> = catalog
            .get(Language::En)
            .products
            .iter()
            .filter(|p| p.link.is_some())
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(linked, vec!["Audity"]);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Catalog::from_json("{\"demo_url\": 1}").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse catalog"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = Catalog::load(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn load_reads_a_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(EMBEDDED_CATALOG.as_bytes()).unwrap();

        let loaded = Catalog::load(&path).unwrap();
        assert_eq!(loaded, Catalog::embedded().unwrap());
    }

    #[test]
    fn validate_rejects_out_of_parity_catalog() {
        let mut catalog = Catalog::embedded().unwrap();
        catalog.de.team.members.pop();

        let err = catalog.validate().unwrap_err();
        match &err {
            CatalogError::Parity(violations) => assert_eq!(violations[0].path, "team.members"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("1 violation(s)"));
    }
}
