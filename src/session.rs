//! Match session orchestration
//!
//! A thin stateful layer over the catalog for interactive callers: it
//! holds the current query color, keeps the derived CMYK/Lab forms in
//! sync, and re-runs the top-K catalog query on every change. There is no
//! hidden reactivity — every mutation recomputes everything, synchronously,
//! in one place.

use crate::catalog::{RankedSwatch, SwatchCatalog};
use crate::color::{basic_color_name, cmyk_to_rgb, rgb_to_cmyk, rgb_to_lab};
use crate::config::MatchConfig;
use crate::constants::matching::DEFAULT_MATCH_COUNT;
use crate::{Cmyk, Lab, Rgb};

/// Interactive matching session against a read-only catalog
///
/// The catalog is borrowed for the session's lifetime; the session never
/// mutates it.
#[derive(Debug)]
pub struct MatchSession<'a> {
    catalog: &'a SwatchCatalog,
    match_count: usize,
    rgb: Rgb,
    cmyk: Cmyk,
    lab: Lab,
    matches: Vec<RankedSwatch<'a>>,
}

impl<'a> MatchSession<'a> {
    /// Start a session with the default query color (mid gray) and the
    /// default match count
    pub fn new(catalog: &'a SwatchCatalog) -> Self {
        Self::with_match_count(catalog, DEFAULT_MATCH_COUNT)
    }

    /// Start a session reporting `match_count` ranked swatches per query
    pub fn with_match_count(catalog: &'a SwatchCatalog, match_count: usize) -> Self {
        let mut session = Self {
            catalog,
            match_count,
            rgb: Rgb::new(128, 128, 128),
            cmyk: Cmyk::new(0.0, 0.0, 0.0, 0.0),
            lab: Lab::new(0.0, 0.0, 0.0),
            matches: Vec::new(),
        };
        session.set_rgb(session.rgb);
        session
    }

    /// Start a session configured by a [`MatchConfig`]
    pub fn with_config(catalog: &'a SwatchCatalog, config: &MatchConfig) -> Self {
        Self::with_match_count(catalog, config.match_count)
    }

    /// Set the query color from RGB and recompute all derived state
    pub fn set_rgb(&mut self, rgb: Rgb) {
        self.rgb = rgb;
        self.lab = rgb_to_lab(rgb);
        self.cmyk = rgb_to_cmyk(rgb);
        self.matches = self.catalog.nearest(self.lab, self.match_count);
    }

    /// Set the query color from CMYK
    ///
    /// Converts through RGB first, so the session's RGB/CMYK/Lab views stay
    /// consistent with each other (the stored CMYK is the re-derived form,
    /// not necessarily the input — CMYK packing is lossy by construction).
    pub fn set_cmyk(&mut self, cmyk: Cmyk) {
        self.set_rgb(cmyk_to_rgb(cmyk));
    }

    /// Shift every RGB channel by `offset`, clamped into [0, 255]
    ///
    /// The calibration nudge exposed as a slider in the matching UI.
    pub fn nudge(&mut self, offset: i16) {
        let shift = |ch: u8| (ch as i16 + offset).clamp(0, 255) as u8;
        self.set_rgb(Rgb::new(shift(self.rgb.r), shift(self.rgb.g), shift(self.rgb.b)));
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn cmyk(&self) -> Cmyk {
        self.cmyk
    }

    pub fn lab(&self) -> Lab {
        self.lab
    }

    /// The current top-K matches, ascending by distance
    pub fn matches(&self) -> &[RankedSwatch<'a>] {
        &self.matches
    }

    /// Coarse display name for the current query color
    pub fn color_name(&self) -> &'static str {
        basic_color_name(self.rgb)
    }
}
