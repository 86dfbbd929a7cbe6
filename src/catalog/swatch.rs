//! Swatch records and load-time validation
//!
//! The wire format is a JSON array of flat records, the same shape the
//! catalog-generation tooling emits. `lab` and `cmyk` are optional in the
//! data and derived from `rgb` when absent; records that parse but carry
//! out-of-domain values are rejected with a descriptive error instead of
//! being silently patched up.

use serde::{Deserialize, Serialize};

use crate::color::{rgb_to_cmyk, rgb_to_lab};
use crate::error::{MatchError, Result};
use crate::{Cmyk, Lab, Rgb};

/// Raw swatch record as it appears in catalog JSON
///
/// Only `name` and `rgb` are required. Unknown fields are rejected so that
/// typos in hand-edited catalogs surface at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwatchRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub rgb: [u8; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lab: Option<[f64; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmyk: Option<[f64; 4]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pantone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A named reference color in the matching catalog
///
/// Immutable after load. `lab` and `cmyk` are always populated: stored
/// values win (compatibility with reference catalogs), otherwise they are
/// derived from `rgb` once, at load time, so queries never re-derive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSwatch {
    /// External catalog id, if the source assigns one
    pub id: Option<String>,
    /// Display name; also the identity used in match listings
    pub name: String,
    pub rgb: Rgb,
    pub lab: Lab,
    pub cmyk: Cmyk,
    /// Opaque catalog metadata, carried through untouched
    pub pantone: Option<String>,
    pub notes: Option<String>,
}

impl ColorSwatch {
    /// Create a swatch from a name and RGB value, deriving Lab and CMYK
    pub fn new(name: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            id: None,
            name: name.into(),
            rgb,
            lab: rgb_to_lab(rgb),
            cmyk: rgb_to_cmyk(rgb),
            pantone: None,
            notes: None,
        }
    }

    /// Resolve a raw record into a swatch, validating stored values
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidSwatch`] when a stored `lab` or `cmyk`
    /// value is non-finite or outside its domain. `index` is the record's
    /// position in the catalog array, for error reporting.
    pub fn from_record(index: usize, record: SwatchRecord) -> Result<Self> {
        let rgb = Rgb::from(record.rgb);

        let lab = match record.lab {
            Some(stored) => {
                validate_lab(index, &record.name, stored)?;
                Lab::from(stored)
            }
            None => rgb_to_lab(rgb),
        };

        let cmyk = match record.cmyk {
            Some(stored) => {
                validate_cmyk(index, &record.name, stored)?;
                Cmyk::from(stored)
            }
            None => rgb_to_cmyk(rgb),
        };

        Ok(Self {
            id: record.id,
            name: record.name,
            rgb,
            lab,
            cmyk,
            pantone: record.pantone,
            notes: record.notes,
        })
    }

    /// Flatten back into the wire record, with the hex form filled in
    pub fn to_record(&self) -> SwatchRecord {
        SwatchRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            rgb: self.rgb.into(),
            lab: Some(self.lab.into()),
            cmyk: Some(self.cmyk.into()),
            hex: Some(self.rgb.to_hex()),
            pantone: self.pantone.clone(),
            notes: self.notes.clone(),
        }
    }
}

// Slack for derived values that graze the domain edge (white computes to
// L = 100 + a few ulps through the 4-digit matrix)
const DOMAIN_SLACK: f64 = 1e-6;

fn validate_lab(index: usize, name: &str, lab: [f64; 3]) -> Result<()> {
    if lab.iter().any(|v| !v.is_finite()) {
        return Err(MatchError::invalid_swatch(
            index,
            name,
            "lab contains a non-finite value",
        ));
    }
    // a and b are unbounded by the math; only L has a fixed domain
    if lab[0] < -DOMAIN_SLACK || lab[0] > 100.0 + DOMAIN_SLACK {
        return Err(MatchError::invalid_swatch(
            index,
            name,
            format!("lab lightness {} outside [0, 100]", lab[0]),
        ));
    }
    Ok(())
}

fn validate_cmyk(index: usize, name: &str, cmyk: [f64; 4]) -> Result<()> {
    if cmyk.iter().any(|v| !v.is_finite()) {
        return Err(MatchError::invalid_swatch(
            index,
            name,
            "cmyk contains a non-finite value",
        ));
    }
    if let Some(v) = cmyk
        .iter()
        .find(|v| **v < -DOMAIN_SLACK || **v > 100.0 + DOMAIN_SLACK)
    {
        return Err(MatchError::invalid_swatch(
            index,
            name,
            format!("cmyk component {} outside [0, 100]", v),
        ));
    }
    Ok(())
}
