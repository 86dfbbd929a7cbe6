//! Color types, conversions, and perceptual distance
//!
//! This module holds the numeric core of the engine: the `Rgb`/`Cmyk`/`Lab`
//! value types, the conversions between them, and the CIEDE2000 distance
//! the catalog ranks with.

pub mod conversion;
pub mod distance;
pub mod names;
pub mod types;

pub use conversion::{cmyk_to_rgb, lab_to_rgb, rgb_to_cmyk, rgb_to_lab};
pub use distance::{delta_e76, delta_e2000};
pub use names::basic_color_name;
pub use types::{Cmyk, Lab, Rgb};
