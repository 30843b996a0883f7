//! Error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::ParityViolation;

/// Failure to load or validate a content catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// File that was read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// The catalog is not valid JSON for the catalog schema.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// The two languages do not have the same shape.
    #[error("catalog languages are out of parity ({} violation(s)): {}", .0.len(), summarize(.0))]
    Parity(Vec<ParityViolation>),
}

fn summarize(violations: &[ParityViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Unknown name for one of the deck's enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}
