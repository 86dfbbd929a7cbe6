//! Integration tests for the complete matching workflow
//!
//! These tests validate the end-to-end path the surrounding application
//! drives: catalog loading and validation, color conversion round-trips
//! over the full RGB grid, distance-metric properties, nearest-neighbor
//! ranking invariants, and session orchestration.

use swatch_match::{
    cmyk_to_rgb, delta_e2000, lab_to_rgb, match_color, rgb_to_cmyk, rgb_to_lab, ColorSwatch,
    Lab, MatchConfig, MatchError, MatchSession, Rgb, SwatchCatalog,
};

fn sample_catalog() -> SwatchCatalog {
    SwatchCatalog::new(vec![
        ColorSwatch::new("Pure Red", Rgb::new(255, 0, 0)),
        ColorSwatch::new("Pure Blue", Rgb::new(0, 0, 255)),
        ColorSwatch::new("Mid Gray", Rgb::new(128, 128, 128)),
    ])
}

// ============================================================================
// Conversion Round-Trip Properties
// ============================================================================

#[test]
fn test_cmyk_roundtrip_bounded_drift() {
    // CMYK packing is lossy by construction; over a full-channel grid the
    // drift stays within one count per channel
    for r in (0..=255).step_by(15) {
        for g in (0..=255).step_by(15) {
            for b in (0..=255).step_by(15) {
                let rgb = Rgb::new(r as u8, g as u8, b as u8);
                let back = cmyk_to_rgb(rgb_to_cmyk(rgb));
                assert!(
                    (back.r as i16 - rgb.r as i16).abs() <= 1
                        && (back.g as i16 - rgb.g as i16).abs() <= 1
                        && (back.b as i16 - rgb.b as i16).abs() <= 1,
                    "CMYK roundtrip drifted: {:?} -> {:?}",
                    rgb,
                    back
                );
            }
        }
    }
}

#[test]
fn test_lab_roundtrip_bounded_drift() {
    for r in (0..=255).step_by(15) {
        for g in (0..=255).step_by(15) {
            for b in (0..=255).step_by(15) {
                let rgb = Rgb::new(r as u8, g as u8, b as u8);
                let back = lab_to_rgb(rgb_to_lab(rgb));
                assert!(
                    (back.r as i16 - rgb.r as i16).abs() <= 1
                        && (back.g as i16 - rgb.g as i16).abs() <= 1
                        && (back.b as i16 - rgb.b as i16).abs() <= 1,
                    "Lab roundtrip drifted: {:?} -> {:?}",
                    rgb,
                    back
                );
            }
        }
    }
}

#[test]
fn test_cmyk_extremes() {
    assert_eq!(
        <[f64; 4]>::from(rgb_to_cmyk(Rgb::new(0, 0, 0))),
        [0.0, 0.0, 0.0, 100.0]
    );
    assert_eq!(
        <[f64; 4]>::from(rgb_to_cmyk(Rgb::new(255, 255, 255))),
        [0.0, 0.0, 0.0, 0.0]
    );
}

// ============================================================================
// Distance Metric Properties
// ============================================================================

#[test]
fn test_delta_e2000_identity_over_grid() {
    for r in (0..=255).step_by(51) {
        for g in (0..=255).step_by(51) {
            for b in (0..=255).step_by(51) {
                let lab = rgb_to_lab(Rgb::new(r as u8, g as u8, b as u8));
                assert_eq!(delta_e2000(lab, lab), 0.0);
            }
        }
    }
}

#[test]
fn test_delta_e2000_symmetry_over_grid() {
    let colors: Vec<Lab> = [
        Rgb::new(255, 0, 0),
        Rgb::new(0, 0, 255),
        Rgb::new(128, 128, 128),
        Rgb::new(12, 200, 97),
        Rgb::new(250, 247, 240),
    ]
    .iter()
    .map(|&rgb| rgb_to_lab(rgb))
    .collect();

    for x in &colors {
        for y in &colors {
            assert!((delta_e2000(*x, *y) - delta_e2000(*y, *x)).abs() < 1e-12);
        }
    }
}

// ============================================================================
// Catalog Loading and Validation
// ============================================================================

#[test]
fn test_load_catalog_from_json_payload() {
    // The record shape the catalog tooling emits: id/hex/cmyk present,
    // lab omitted and derived at load
    let json = r##"[
        {
            "id": "dc143c",
            "name": "crimson",
            "cmyk": [0.0, 90.91, 72.73, 13.73],
            "rgb": [220, 20, 60],
            "hex": "#dc143c"
        },
        {
            "id": "4682b4",
            "name": "steelblue",
            "cmyk": [59.65, 27.19, 0.0, 29.02],
            "rgb": [70, 130, 180],
            "hex": "#4682b4"
        }
    ]"##;

    let catalog = SwatchCatalog::from_json(json).unwrap();
    assert_eq!(catalog.len(), 2);

    let crimson = &catalog.swatches()[0];
    assert_eq!(crimson.id.as_deref(), Some("dc143c"));
    assert_eq!(crimson.lab, rgb_to_lab(Rgb::new(220, 20, 60)));
    assert_eq!(crimson.rgb.to_hex(), "#DC143C");
}

#[test]
fn test_load_rejects_missing_rgb() {
    let json = r#"[{"id": "x", "name": "no color here"}]"#;
    match SwatchCatalog::from_json(json).unwrap_err() {
        MatchError::CatalogParse { .. } => {}
        other => panic!("expected CatalogParse, got: {:?}", other),
    }
}

#[test]
fn test_load_rejects_non_numeric_channel() {
    let json = r#"[{"name": "stringly", "rgb": [255, "0", 0]}]"#;
    assert!(SwatchCatalog::from_json(json).is_err());
}

#[test]
fn test_load_rejects_out_of_domain_stored_values() {
    let json = r#"[{"name": "bad lab", "rgb": [0, 0, 0], "lab": [-5.0, 0.0, 0.0]}]"#;
    match SwatchCatalog::from_json(json).unwrap_err() {
        MatchError::InvalidSwatch { index, name, .. } => {
            assert_eq!(index, 0);
            assert_eq!(name, "bad lab");
        }
        other => panic!("expected InvalidSwatch, got: {:?}", other),
    }
}

#[test]
fn test_load_missing_file() {
    let err = SwatchCatalog::from_json_file(std::path::Path::new("nonexistent_catalog.json"))
        .unwrap_err();
    match err {
        MatchError::CatalogIo { .. } => {}
        other => panic!("expected CatalogIo, got: {:?}", other),
    }
}

// ============================================================================
// Nearest-Neighbor Ranking
// ============================================================================

#[test]
fn test_scenario_red_query() {
    // Query near pure red against the three-swatch scenario catalog. The
    // second place is asserted from the computed distances, not guessed.
    let catalog = sample_catalog();
    let query = Rgb::new(250, 10, 10);
    let ranked = match_color(&catalog, query, 2);

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].swatch.name, "Pure Red");
    assert!(ranked[0].distance < 5.0);

    let query_lab = rgb_to_lab(query);
    let blue = delta_e2000(query_lab, rgb_to_lab(Rgb::new(0, 0, 255)));
    let gray = delta_e2000(query_lab, rgb_to_lab(Rgb::new(128, 128, 128)));
    let expected_second = if gray <= blue { "Mid Gray" } else { "Pure Blue" };
    assert_eq!(ranked[1].swatch.name, expected_second);
}

#[test]
fn test_ranking_is_sorted_and_complete() {
    let catalog = sample_catalog();
    let ranked = match_color(&catalog, Rgb::new(90, 90, 200), 100);

    assert_eq!(ranked.len(), catalog.len());
    for pair in ranked.windows(2) {
        assert!(pair[0].distance <= pair[1].distance);
    }
}

#[test]
fn test_k_zero_and_empty_catalog() {
    let catalog = sample_catalog();
    assert!(match_color(&catalog, Rgb::new(1, 2, 3), 0).is_empty());

    let empty = SwatchCatalog::default();
    assert!(match_color(&empty, Rgb::new(1, 2, 3), 5).is_empty());
}

// ============================================================================
// Session Orchestration
// ============================================================================

#[test]
fn test_session_full_flow() {
    let catalog = sample_catalog();
    let mut session = MatchSession::with_match_count(&catalog, 2);

    session.set_rgb(Rgb::new(250, 10, 10));
    assert_eq!(session.matches()[0].swatch.name, "Pure Red");
    assert_eq!(session.color_name(), "Red");

    // Switching the query via CMYK keeps every derived view consistent
    let blue_cmyk = rgb_to_cmyk(Rgb::new(0, 0, 255));
    session.set_cmyk(blue_cmyk);
    assert_eq!(session.rgb(), Rgb::new(0, 0, 255));
    assert_eq!(session.matches()[0].swatch.name, "Pure Blue");
    assert!(session.matches()[0].distance < 1e-9);
}

#[test]
fn test_session_respects_config() {
    let catalog = sample_catalog();
    let config: MatchConfig = serde_json::from_str(r#"{"match_count": 1}"#).unwrap();
    let session = MatchSession::with_config(&catalog, &config);
    assert_eq!(session.matches().len(), 1);
}
