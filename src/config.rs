//! Configuration for matching sessions
//!
//! A small serde-backed configuration so deployments can point at their
//! own catalog file and tune how many matches a query reports without
//! recompiling. Loadable from JSON or constructed programmatically:
//!
//! ```no_run
//! use swatch_match::MatchConfig;
//! use std::path::Path;
//!
//! let config = MatchConfig::from_json_file(Path::new("match_config.json"))?;
//! # Ok::<(), swatch_match::MatchError>(())
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::matching::DEFAULT_MATCH_COUNT;
use crate::error::{MatchError, Result};

/// Matching session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Catalog JSON file to load, if the caller doesn't inject one
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Number of ranked swatches reported per query
    #[serde(default = "default_match_count")]
    pub match_count: usize,
}

fn default_match_count() -> usize {
    DEFAULT_MATCH_COUNT
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            match_count: DEFAULT_MATCH_COUNT,
        }
    }
}

impl MatchConfig {
    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| MatchError::catalog_io(path, e))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| MatchError::catalog_io(path, e))?;
        Ok(())
    }
}
