//! # swatch-match
//!
//! A perceptual color-matching engine for print workflows.
//!
//! This library converts colors between RGB, CMYK, and CIE L*a*b*,
//! measures perceptual distance with CIEDE2000, and ranks a catalog of
//! named reference swatches by closeness to a query color:
//! - RGB ↔ Lab through linear sRGB and XYZ (D65)
//! - RGB ↔ naive CMYK with a single, documented key convention
//! - CIEDE2000 distance validated against the published reference pairs
//! - Exhaustive nearest-neighbor ranking with stable tie order
//!
//! The engine is pure and synchronous: the caller supplies colors and an
//! already-materialized catalog, and consumes ranked results. Fetching
//! catalog data, pixel sampling, and ICC profiles are external concerns.
//!
//! ## Example
//!
//! ```
//! use swatch_match::{match_color, ColorSwatch, Rgb, SwatchCatalog};
//!
//! let catalog = SwatchCatalog::new(vec![
//!     ColorSwatch::new("Pure Red", Rgb::new(255, 0, 0)),
//!     ColorSwatch::new("Pure Blue", Rgb::new(0, 0, 255)),
//!     ColorSwatch::new("Mid Gray", Rgb::new(128, 128, 128)),
//! ]);
//!
//! let ranked = match_color(&catalog, Rgb::new(250, 10, 10), 2);
//! assert_eq!(ranked[0].swatch.name, "Pure Red");
//! println!("ΔE2000 = {:.2}", ranked[0].distance);
//! ```

pub mod catalog;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod session;

pub use catalog::{ColorSwatch, RankedSwatch, SwatchCatalog, SwatchRecord};
pub use color::{
    basic_color_name, cmyk_to_rgb, delta_e76, delta_e2000, lab_to_rgb, rgb_to_cmyk, rgb_to_lab,
    Cmyk, Lab, Rgb,
};
pub use config::MatchConfig;
pub use error::{MatchError, Result};
pub use session::MatchSession;

/// Rank the `k` catalog swatches nearest to an RGB query color
///
/// The single externally meaningful entry point: converts the query to
/// Lab, computes CIEDE2000 against every swatch, and returns the top `k`
/// ascending by distance. Ties keep catalog order; an empty catalog or
/// `k == 0` yields an empty vec.
pub fn match_color(catalog: &SwatchCatalog, rgb: Rgb, k: usize) -> Vec<RankedSwatch<'_>> {
    catalog.match_rgb(rgb, k)
}
