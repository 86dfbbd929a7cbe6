//! Color value types
//!
//! Plain value types for the three representations the matching engine
//! works in. All are `Copy`, carry no identity, and are created per
//! conversion call.

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// RGB color, 0-255 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create an RGB color from channel values
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as a hexadecimal color string (e.g., "#FF0000")
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse a hexadecimal color string ("#FF0000" or "FF0000")
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidHexColor`] if the string is not six hex
    /// digits (with optional leading `#`).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 {
            return Err(MatchError::InvalidHexColor {
                value: hex.to_string(),
                reason: format!("expected 6 hex digits, got {}", digits.len()),
            });
        }

        let parse = |range: std::ops::Range<usize>, channel: &str| {
            u8::from_str_radix(&digits[range], 16).map_err(|e| MatchError::InvalidHexColor {
                value: hex.to_string(),
                reason: format!("invalid {} component: {}", channel, e),
            })
        };

        Ok(Self {
            r: parse(0..2, "red")?,
            g: parse(2..4, "green")?,
            b: parse(4..6, "blue")?,
        })
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

/// CMYK color, percentages in [0, 100] per channel
///
/// Components keep full precision; integer display values come from
/// [`Cmyk::rounded`]. Rounding before storage would break the documented
/// CMYK round-trip drift bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    /// Create a CMYK color from percentage components
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }

    /// Components rounded to whole percentages, for display
    pub fn rounded(self) -> Self {
        Self {
            c: self.c.round(),
            m: self.m.round(),
            y: self.y.round(),
            k: self.k.round(),
        }
    }

    /// Components clamped into [0, 100]
    pub fn clamped(self) -> Self {
        Self {
            c: self.c.clamp(0.0, 100.0),
            m: self.m.clamp(0.0, 100.0),
            y: self.y.clamp(0.0, 100.0),
            k: self.k.clamp(0.0, 100.0),
        }
    }
}

impl From<[f64; 4]> for Cmyk {
    fn from(cmyk: [f64; 4]) -> Self {
        Self::new(cmyk[0], cmyk[1], cmyk[2], cmyk[3])
    }
}

impl From<Cmyk> for [f64; 4] {
    fn from(cmyk: Cmyk) -> Self {
        [cmyk.c, cmyk.m, cmyk.y, cmyk.k]
    }
}

/// CIE L*a*b* color (D65)
///
/// L is nominally [0, 100]; a and b are roughly [-128, 127] for colors that
/// came from sRGB but unbounded by the math itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    /// Create a Lab color from its components
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma: sqrt(a² + b²)
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }
}

impl From<[f64; 3]> for Lab {
    fn from(lab: [f64; 3]) -> Self {
        Self::new(lab[0], lab[1], lab[2])
    }
}

impl From<Lab> for [f64; 3] {
    fn from(lab: Lab) -> Self {
        [lab.l, lab.a, lab.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(Rgb::new(255, 0, 0).to_hex(), "#FF0000");
        assert_eq!(Rgb::new(0, 255, 0).to_hex(), "#00FF00");
        assert_eq!(Rgb::new(0, 0, 255).to_hex(), "#0000FF");
        assert_eq!(Rgb::new(51, 102, 204).to_hex(), "#3366CC");
    }

    #[test]
    fn test_rgb_from_hex() {
        let red = Rgb::from_hex("#FF0000").unwrap();
        assert_eq!(red, Rgb::new(255, 0, 0));

        // Leading # is optional
        let green = Rgb::from_hex("00FF00").unwrap();
        assert_eq!(green, Rgb::new(0, 255, 0));

        // Lowercase digits accepted
        let blue = Rgb::from_hex("#0000ff").unwrap();
        assert_eq!(blue, Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_rgb_from_hex_invalid() {
        assert!(Rgb::from_hex("#FF").is_err()); // Too short
        assert!(Rgb::from_hex("#GGGGGG").is_err()); // Invalid chars
        assert!(Rgb::from_hex("#FF00001").is_err()); // Too long
    }

    #[test]
    fn test_hex_roundtrip() {
        let color = Rgb::new(18, 52, 86);
        assert_eq!(Rgb::from_hex(&color.to_hex()).unwrap(), color);
    }

    #[test]
    fn test_cmyk_rounded() {
        let cmyk = Cmyk::new(10.4, 20.5, 0.0, 99.6);
        let rounded = cmyk.rounded();
        assert_eq!(rounded.c, 10.0);
        assert_eq!(rounded.m, 21.0);
        assert_eq!(rounded.y, 0.0);
        assert_eq!(rounded.k, 100.0);
    }

    #[test]
    fn test_cmyk_clamped() {
        let cmyk = Cmyk::new(-5.0, 120.0, 50.0, 100.0).clamped();
        assert_eq!(cmyk.c, 0.0);
        assert_eq!(cmyk.m, 100.0);
        assert_eq!(cmyk.y, 50.0);
        assert_eq!(cmyk.k, 100.0);
    }

    #[test]
    fn test_lab_chroma() {
        let lab = Lab::new(50.0, 3.0, 4.0);
        assert!((lab.chroma() - 5.0).abs() < 1e-12);

        let neutral = Lab::new(50.0, 0.0, 0.0);
        assert_eq!(neutral.chroma(), 0.0);
    }

    #[test]
    fn test_array_conversions() {
        let rgb: Rgb = [1, 2, 3].into();
        assert_eq!(<[u8; 3]>::from(rgb), [1, 2, 3]);

        let lab: Lab = [50.0, -1.0, 2.0].into();
        assert_eq!(<[f64; 3]>::from(lab), [50.0, -1.0, 2.0]);
    }
}
