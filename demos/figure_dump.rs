//! Geofig demo — parses a built-in figure and prints both serializations.
//!
//! ```text
//! cargo run --example figure_dump
//! ```

use geofig::export::{json, text};
use geofig::parser::{parse, GeometryBuilder, NullBuilder};

const TRIANGLE: &str = r#"
{
    "Figure": {
        "description": "Right triangle in the first quadrant.",
        "points": [
            {"name": "A", "x": 0, "y": 0},
            {"name": "B", "x": 1, "y": 1},
            {"name": "C", "x": 1, "y": 0}
        ],
        "segments": [
            {"A": ["B", "C"]},
            {"B": ["A", "C"]},
            {"C": ["A", "B"]}
        ]
    }
}
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default: WARN for everything, INFO for geofig.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geofig=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("geofig=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Validate-only pass first, then materialize with the same parse.
    parse(TRIANGLE, &NullBuilder)?;
    let figure = parse(TRIANGLE, &GeometryBuilder)?
        .ok_or("materializing parse returned no figure")?;

    println!("{}", text::to_text(&figure));
    println!("{}", json::to_json_string(&figure));
    Ok(())
}
