//! Color space conversions
//!
//! Pure transforms between the three representations the engine works in:
//! - RGB to CIE L*a*b* through linear sRGB and XYZ (D65)
//! - Lab back to RGB with gamut clamping
//! - RGB to naive CMYK and back
//!
//! All functions are deterministic, total over their domains, and
//! side-effect-free. The matrix and threshold constants live in
//! [`crate::constants`] and are normative: existing catalogs store Lab
//! values produced with exactly these numbers.
//!
//! CMYK convention: `k = min(1-r', 1-g', 1-b')` with the remaining channels
//! renormalized by `1-k`. The equivalent `k = 1-max` formulation appears in
//! the literature; only this one ships, as the single source of truth.

use crate::constants::{d65, lab, srgb};
use crate::{Cmyk, Lab, Rgb};

/// Inverse sRGB gamma: encoded [0,1] channel to linear light
fn srgb_decode(c: f64) -> f64 {
    if c > srgb::GAMMA_THRESHOLD {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

/// Forward sRGB gamma: linear light to encoded [0,1] channel
fn srgb_encode(c: f64) -> f64 {
    if c > srgb::LINEAR_THRESHOLD {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * c
    }
}

/// Lab nonlinearity f(t)
fn lab_f(t: f64) -> f64 {
    if t > lab::EPSILON {
        t.cbrt()
    } else {
        lab::LINEAR_SLOPE * t + lab::LINEAR_OFFSET
    }
}

/// Inverse of the Lab nonlinearity
fn lab_f_inv(f: f64) -> f64 {
    let cube = f * f * f;
    if cube > lab::EPSILON {
        cube
    } else {
        (f - lab::LINEAR_OFFSET) / lab::LINEAR_SLOPE
    }
}

/// Convert RGB to CIE L*a*b* (D65)
///
/// # Arguments
///
/// * `rgb` - RGB color, 0-255 per channel
///
/// # Returns
///
/// Lab color under the D65 illuminant
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    let r = srgb_decode(rgb.r as f64 / 255.0);
    let g = srgb_decode(rgb.g as f64 / 255.0);
    let b = srgb_decode(rgb.b as f64 / 255.0);

    let m = &srgb::RGB_TO_XYZ;
    let x = r * m[0][0] + g * m[0][1] + b * m[0][2];
    let y = r * m[1][0] + g * m[1][1] + b * m[1][2];
    let z = r * m[2][0] + g * m[2][1] + b * m[2][2];

    let fx = lab_f(x / d65::WHITE_X);
    let fy = lab_f(y / d65::WHITE_Y);
    let fz = lab_f(z / d65::WHITE_Z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convert CIE L*a*b* back to RGB, clamping into the sRGB gamut
///
/// The inverse path is lossy: out-of-gamut Lab values saturate to the
/// nearest representable channel value rather than erroring.
///
/// # Arguments
///
/// * `lab` - Lab color (D65)
///
/// # Returns
///
/// RGB color with each channel rounded and clamped into [0, 255]
pub fn lab_to_rgb(lab: Lab) -> Rgb {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    let x = lab_f_inv(fx) * d65::WHITE_X;
    let y = lab_f_inv(fy) * d65::WHITE_Y;
    let z = lab_f_inv(fz) * d65::WHITE_Z;

    let m = &srgb::XYZ_TO_RGB;
    let r = srgb_encode(x * m[0][0] + y * m[0][1] + z * m[0][2]);
    let g = srgb_encode(x * m[1][0] + y * m[1][1] + z * m[1][2]);
    let b = srgb_encode(x * m[2][0] + y * m[2][1] + z * m[2][2]);

    let channel = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    }
}

/// Convert RGB to CMYK percentages
///
/// Pure black is a defined special case mapping to `(0, 0, 0, 100)`, which
/// also keeps the `1-k` renormalization away from a division by zero.
/// Components keep full precision; round at the display boundary with
/// [`Cmyk::rounded`].
///
/// # Arguments
///
/// * `rgb` - RGB color, 0-255 per channel
///
/// # Returns
///
/// CMYK color with percentage components in [0, 100]
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let c = 1.0 - rgb.r as f64 / 255.0;
    let m = 1.0 - rgb.g as f64 / 255.0;
    let y = 1.0 - rgb.b as f64 / 255.0;
    let k = c.min(m).min(y);

    if k >= 1.0 {
        return Cmyk::new(0.0, 0.0, 0.0, 100.0);
    }

    Cmyk::new(
        (c - k) / (1.0 - k) * 100.0,
        (m - k) / (1.0 - k) * 100.0,
        (y - k) / (1.0 - k) * 100.0,
        k * 100.0,
    )
}

/// Convert CMYK percentages to RGB
///
/// Inputs are clamped into [0, 100] before conversion, so the function is
/// robust against out-of-range values coming from hand-edited data.
///
/// # Arguments
///
/// * `cmyk` - CMYK color with percentage components
///
/// # Returns
///
/// RGB color with each channel rounded into [0, 255]
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let cmyk = cmyk.clamped();
    let c = cmyk.c / 100.0;
    let m = cmyk.m / 100.0;
    let y = cmyk.y / 100.0;
    let k = cmyk.k / 100.0;

    let channel = |v: f64| (255.0 * v * (1.0 - k)).round().clamp(0.0, 255.0) as u8;
    Rgb {
        r: channel(1.0 - c),
        g: channel(1.0 - m),
        b: channel(1.0 - y),
    }
}
