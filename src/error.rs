//! Error types for the swatch_match library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for swatch_match operations
pub type Result<T> = std::result::Result<T, MatchError>;

/// Error types for catalog loading and color parsing
///
/// The conversion and distance functions are total over their domains and
/// never fail; errors arise only at the data boundary, when a catalog or a
/// color literal comes in from outside.
#[derive(Error, Debug)]
pub enum MatchError {
    /// Catalog file could not be read
    #[error("Failed to read catalog file {path:?}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON could not be parsed (missing fields, non-numeric values)
    #[error("Failed to parse swatch catalog: {source}")]
    CatalogParse {
        #[source]
        source: serde_json::Error,
    },

    /// A swatch record parsed but carried out-of-domain values
    #[error("Invalid swatch {index} ({name}): {reason}")]
    InvalidSwatch {
        index: usize,
        name: String,
        reason: String,
    },

    /// Hex color string could not be parsed
    #[error("Invalid hex color {value:?}: {reason}")]
    InvalidHexColor { value: String, reason: String },
}

impl MatchError {
    /// Create a catalog I/O error with file context
    pub fn catalog_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CatalogIo {
            path: path.into(),
            source,
        }
    }

    /// Create a validation error for a single swatch record
    pub fn invalid_swatch(index: usize, name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSwatch {
            index,
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for MatchError {
    fn from(source: serde_json::Error) -> Self {
        Self::CatalogParse { source }
    }
}
