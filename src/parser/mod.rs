//! JSON figure parser.
//!
//! Walks input of this shape against a construction strategy:
//!
//! ```json
//! {
//!     "Figure": {
//!         "description": "<string>",
//!         "points": [{"name": "A", "x": 0, "y": 0}],
//!         "segments": [{"A": ["B", "C"]}]
//!     }
//! }
//! ```
//!
//! Points are parsed before segments, and every name inside the segments
//! array must resolve against the already-parsed point set; resolution
//! is never deferred.

pub mod builder;

pub use builder::{FigureBuilder, GeometryBuilder, NullBuilder};

use serde_json::{Map, Value};

use crate::error::{Result, StructuralError};
use crate::figure::{Figure, Point, PointId, PointRegistry, SegmentGraph};
use crate::math::quantize;

const KEY_FIGURE: &str = "Figure";
const KEY_DESCRIPTION: &str = "description";
const KEY_POINTS: &str = "points";
const KEY_SEGMENTS: &str = "segments";
const KEY_NAME: &str = "name";
const KEY_X: &str = "x";
const KEY_Y: &str = "y";

/// Parses `text` into a figure via `builder`.
///
/// Returns `Ok(None)` when the strategy declines to materialize (the
/// validate-only pass) and `Ok(Some(figure))` otherwise. Error behavior is
/// identical for both cases.
///
/// # Errors
///
/// Returns a [`StructuralError`] on malformed JSON, a missing or mistyped
/// schema key, or a segment entry referencing an unknown point name.
pub fn parse(text: &str, builder: &dyn FigureBuilder) -> Result<Option<Figure>> {
    let root: Value = serde_json::from_str(text)?;
    let root = root.as_object().ok_or(StructuralError::NotAnObject)?;

    let figure = get_object(root, KEY_FIGURE)?;
    let description = get_string(figure, KEY_DESCRIPTION)?;

    let mut names = NameTable::default();
    let points = parse_points(get_array(figure, KEY_POINTS)?, &mut names, builder)?;
    let registry = builder.build_point_registry(points);

    let mut graph = builder.build_segment_graph();
    parse_segments(
        get_array(figure, KEY_SEGMENTS)?,
        &names,
        registry.as_ref(),
        graph.as_mut(),
        builder,
    )?;

    Ok(builder.build_figure(description, registry, graph))
}

/// Parser-side name resolution table.
///
/// Mirrors the registry's coordinate dedup (the first point stored at a
/// grid cell keeps its name) without materializing model objects, so
/// unresolved-name errors fire identically under the null and
/// materializing strategies.
#[derive(Debug, Default)]
struct NameTable {
    entries: Vec<(String, u64, u64)>,
}

impl NameTable {
    fn insert(&mut self, name: &str, x: f64, y: f64) {
        let qx = quantize(x).to_bits();
        let qy = quantize(y).to_bits();
        if self.entries.iter().any(|e| e.1 == qx && e.2 == qy) {
            return;
        }
        self.entries.push((name.to_owned(), qx, qy));
    }

    fn resolves(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.0 == name)
    }
}

fn parse_points(
    entries: &[Value],
    names: &mut NameTable,
    builder: &dyn FigureBuilder,
) -> Result<Vec<Point>> {
    let mut points = Vec::with_capacity(entries.len());
    for entry in entries {
        let entry = entry.as_object().ok_or(StructuralError::MalformedPointEntry)?;
        let name = get_string(entry, KEY_NAME)?;
        let x = get_number(entry, KEY_X)?;
        let y = get_number(entry, KEY_Y)?;

        names.insert(name, x, y);
        points.extend(builder.build_point(name, x, y));
    }
    Ok(points)
}

fn parse_segments(
    entries: &[Value],
    names: &NameTable,
    registry: Option<&PointRegistry>,
    mut graph: Option<&mut SegmentGraph>,
    builder: &dyn FigureBuilder,
) -> Result<()> {
    for entry in entries {
        let entry = entry
            .as_object()
            .ok_or(StructuralError::MalformedSegmentEntry)?;
        let (key, value) = entry
            .iter()
            .next()
            .ok_or(StructuralError::MalformedSegmentEntry)?;

        if !names.resolves(key) {
            return Err(StructuralError::UnknownPoint {
                name: key.clone(),
                context: "segment entry",
            });
        }

        let neighbors = value
            .as_array()
            .ok_or_else(|| StructuralError::MalformedAdjacency(key.clone()))?;

        for neighbor in neighbors {
            let neighbor = neighbor
                .as_str()
                .ok_or_else(|| StructuralError::MalformedAdjacency(key.clone()))?;
            if !names.resolves(neighbor) {
                return Err(StructuralError::UnknownPoint {
                    name: neighbor.to_owned(),
                    context: "adjacency list",
                });
            }

            let segment = resolve_pair(registry, key, neighbor)
                .and_then(|(from, to)| builder.build_segment(from, to));
            builder.link_segment(graph.as_deref_mut(), segment);
        }
    }
    Ok(())
}

// Registry lookups cannot fail where the name table resolved: both apply
// the same first-stored-wins dedup.
fn resolve_pair(
    registry: Option<&PointRegistry>,
    from: &str,
    to: &str,
) -> Option<(PointId, PointId)> {
    let registry = registry?;
    Some((registry.find_by_name(from)?, registry.find_by_name(to)?))
}

fn get_object<'a>(obj: &'a Map<String, Value>, key: &'static str) -> Result<&'a Map<String, Value>> {
    obj.get(key)
        .and_then(Value::as_object)
        .ok_or(StructuralError::MissingObject(key))
}

fn get_string<'a>(obj: &'a Map<String, Value>, key: &'static str) -> Result<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .ok_or(StructuralError::MissingString(key))
}

fn get_array<'a>(obj: &'a Map<String, Value>, key: &'static str) -> Result<&'a [Value]> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|a| a.as_slice())
        .ok_or(StructuralError::MissingArray(key))
}

fn get_number(obj: &Map<String, Value>, key: &'static str) -> Result<f64> {
    obj.get(key)
        .and_then(Value::as_f64)
        .ok_or(StructuralError::MissingNumber(key))
}
