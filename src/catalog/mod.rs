//! Swatch catalog and nearest-neighbor ranking
//!
//! The catalog is an insertion-ordered sequence of reference swatches,
//! loaded once and read-only afterwards. Matching is an exhaustive scan:
//! CIEDE2000 against every swatch, stable sort, take the top k. At catalog
//! sizes in the tens to low thousands this is well under a millisecond and
//! keeps the ranking contract trivial (ties resolve to catalog order).

pub mod swatch;

use std::fs;
use std::path::Path;

use crate::color::{delta_e2000, rgb_to_lab};
use crate::error::{MatchError, Result};
use crate::{Lab, Rgb};

pub use swatch::{ColorSwatch, SwatchRecord};

/// A swatch paired with its distance to a query color
///
/// Transient query output; borrows the swatch from the catalog.
#[derive(Debug, Clone, Copy)]
pub struct RankedSwatch<'a> {
    pub swatch: &'a ColorSwatch,
    /// CIEDE2000 distance to the query, non-negative
    pub distance: f64,
}

/// An ordered collection of named reference swatches
///
/// Duplicates are legal and rank independently; the catalog never
/// deduplicates. All queries take `&self`, so a loaded catalog can be
/// shared across threads without locking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwatchCatalog {
    swatches: Vec<ColorSwatch>,
}

impl SwatchCatalog {
    /// Create a catalog from an already-materialized swatch sequence
    pub fn new(swatches: Vec<ColorSwatch>) -> Self {
        Self { swatches }
    }

    /// Parse a catalog from a JSON array of swatch records
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::CatalogParse`] for malformed JSON (missing
    /// `name`/`rgb`, non-numeric or out-of-range channel values) and
    /// [`MatchError::InvalidSwatch`] for records whose stored `lab`/`cmyk`
    /// values are outside their domains.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<SwatchRecord> = serde_json::from_str(json)?;
        let swatches = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| ColorSwatch::from_record(index, record))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(swatches))
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::CatalogIo`] if the file cannot be read, plus
    /// everything [`SwatchCatalog::from_json`] can return.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| MatchError::catalog_io(path, e))?;
        Self::from_json(&json)
    }

    /// Serialize the catalog back to pretty-printed JSON records
    pub fn to_json(&self) -> Result<String> {
        let records: Vec<SwatchRecord> = self.swatches.iter().map(ColorSwatch::to_record).collect();
        Ok(serde_json::to_string_pretty(&records)?)
    }

    /// Append a swatch to the end of the catalog
    pub fn push(&mut self, swatch: ColorSwatch) {
        self.swatches.push(swatch);
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// The swatches in catalog (insertion) order
    pub fn swatches(&self) -> &[ColorSwatch] {
        &self.swatches
    }

    /// Rank the `k` swatches nearest to a query Lab color
    ///
    /// Distances are CIEDE2000. The result is sorted ascending; ties keep
    /// catalog order (stable sort). Returns `min(k, len)` entries; an empty
    /// catalog or `k == 0` yields an empty vec, never an error.
    pub fn nearest(&self, query: Lab, k: usize) -> Vec<RankedSwatch<'_>> {
        if k == 0 || self.swatches.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<RankedSwatch<'_>> = self
            .swatches
            .iter()
            .map(|swatch| RankedSwatch {
                swatch,
                distance: delta_e2000(query, swatch.lab),
            })
            .collect();
        ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        ranked.truncate(k);
        ranked
    }

    /// Rank the `k` swatches nearest to a query RGB color
    ///
    /// The query entry point the surrounding application calls on every
    /// color change: converts to Lab, then ranks with [`Self::nearest`].
    pub fn match_rgb(&self, rgb: Rgb, k: usize) -> Vec<RankedSwatch<'_>> {
        self.nearest(rgb_to_lab(rgb), k)
    }

    /// The swatches reordered by HSV hue, for display listings
    ///
    /// Matching never depends on this ordering; it exists for the same
    /// reason the catalog tooling sorts its output — so adjacent entries
    /// look adjacent.
    pub fn sorted_by_hue(&self) -> Vec<&ColorSwatch> {
        let mut ordered: Vec<&ColorSwatch> = self.swatches.iter().collect();
        ordered.sort_by(|a, b| hsv_hue(a.rgb).total_cmp(&hsv_hue(b.rgb)));
        ordered
    }
}

/// HSV hue of an RGB color in degrees [0, 360); 0 for neutrals
fn hsv_hue(rgb: Rgb) -> f64 {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta == 0.0 {
        return 0.0;
    }

    let hue = if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    if hue < 0.0 {
        hue + 360.0
    } else {
        hue
    }
}
