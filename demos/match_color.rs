//! Command-line interface for swatch_match
//!
//! Loads a swatch catalog from JSON and ranks it against a query color
//! given as a hex string. JSON goes to stdout for programmatic use, a
//! human-readable summary to stderr.

use std::{env, path::PathBuf, process};

use swatch_match::{
    basic_color_name, rgb_to_cmyk, rgb_to_lab, MatchConfig, Rgb, SwatchCatalog,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut catalog_path = None;
    let mut config_path = None;
    let mut hex_arg = None;
    let mut count_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--catalog" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --catalog requires a file path");
                    process::exit(1);
                }
                catalog_path = Some(PathBuf::from(&args[i]));
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    process::exit(1);
                }
                config_path = Some(PathBuf::from(&args[i]));
            }
            "--count" | "-k" => {
                i += 1;
                let parsed = args.get(i).and_then(|v| v.parse::<usize>().ok());
                match parsed {
                    Some(k) => count_arg = Some(k),
                    None => {
                        eprintln!("Error: --count requires a non-negative integer");
                        process::exit(1);
                    }
                }
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if hex_arg.is_none() {
                    hex_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple query colors provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let hex = match hex_arg {
        Some(hex) => hex,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let query = match Rgb::from_hex(&hex) {
        Ok(rgb) => rgb,
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    };

    let config = match config_path {
        Some(path) => match MatchConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Error: {}", error);
                process::exit(1);
            }
        },
        None => MatchConfig::default(),
    };

    let path = match catalog_path.or(config.catalog_path.clone()) {
        Some(path) => path,
        None => {
            eprintln!("Error: No catalog given (use --catalog or a config file)");
            process::exit(1);
        }
    };

    let catalog = match SwatchCatalog::from_json_file(&path) {
        Ok(catalog) => catalog,
        Err(error) => {
            eprintln!("Catalog load failed: {}", error);
            process::exit(1);
        }
    };

    let count = count_arg.unwrap_or(config.match_count);
    let ranked = catalog.match_rgb(query, count);

    // JSON to stdout for programmatic use
    let rows: Vec<serde_json::Value> = ranked
        .iter()
        .map(|r| {
            serde_json::json!({
                "name": r.swatch.name,
                "hex": r.swatch.rgb.to_hex(),
                "distance": r.distance,
            })
        })
        .collect();
    match serde_json::to_string_pretty(&rows) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing results: {}", e);
            process::exit(1);
        }
    }

    // Summary to stderr for human reading
    let lab = rgb_to_lab(query);
    let cmyk = rgb_to_cmyk(query).rounded();
    eprintln!();
    eprintln!("Query {} ({})", query.to_hex(), basic_color_name(query));
    eprintln!("  Lab:  L*={:.1}, a*={:.1}, b*={:.1}", lab.l, lab.a, lab.b);
    eprintln!(
        "  CMYK: {:.0}/{:.0}/{:.0}/{:.0}",
        cmyk.c, cmyk.m, cmyk.y, cmyk.k
    );
    eprintln!("Top {} of {} swatches:", ranked.len(), catalog.len());
    for (place, r) in ranked.iter().enumerate() {
        eprintln!(
            "  {}. {} {} (ΔE2000 = {:.2})",
            place + 1,
            r.swatch.rgb.to_hex(),
            r.swatch.name,
            r.distance
        );
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <hex_color>", program_name);
    eprintln!();
    eprintln!("Rank catalog swatches by perceptual closeness to a query color.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --catalog FILE   Swatch catalog JSON (array of {{name, rgb, ...}} records)");
    eprintln!("  --config FILE    MatchConfig JSON (catalog path, match count)");
    eprintln!("  --count, -k N    Number of matches to report (default: 5)");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --catalog swatches.json '#DC143C'", program_name);
    eprintln!("  {} --catalog swatches.json -k 10 4682B4", program_name);
}
