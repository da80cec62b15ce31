//! Canonical JSON exporter.

use serde_json::{json, Map, Value};

use super::{group_unique, Node};
use crate::figure::{Figure, PointId, PointRegistry, SegmentGraph};

/// Serializes a figure to the canonical input schema.
///
/// The segments array uses the unique-edge view, so re-parsing the output
/// yields the same undirected edge set without doubling every edge.
#[must_use]
pub fn to_json(figure: &Figure) -> Value {
    emit(Node::Figure(figure))
}

/// Serializes a figure to a JSON string.
#[must_use]
pub fn to_json_string(figure: &Figure) -> String {
    to_json(figure).to_string()
}

fn emit(node: Node<'_>) -> Value {
    match node {
        Node::Figure(figure) => json!({
            "Figure": {
                "description": figure.description(),
                "points": emit(Node::Points(figure.points())),
                "segments": emit(Node::Segments {
                    graph: figure.segments(),
                    points: figure.points(),
                }),
            }
        }),
        Node::Points(registry) => Value::Array(
            registry
                .iter()
                .map(|(_, point)| emit(Node::Point(point)))
                .collect(),
        ),
        Node::Segments { graph, points } => segments_value(graph, points),
        Node::Point(point) => json!({
            "name": point.name(),
            "x": point.x(),
            "y": point.y(),
        }),
    }
}

fn segments_value(graph: &SegmentGraph, points: &PointRegistry) -> Value {
    let mut entries = Vec::new();
    for (from, neighbors) in group_unique(graph) {
        let Some(from_name) = name_of(points, from) else {
            continue;
        };
        let list: Vec<Value> = neighbors
            .iter()
            .filter_map(|&to| name_of(points, to))
            .map(Value::from)
            .collect();

        let mut entry = Map::new();
        entry.insert(from_name, Value::Array(list));
        entries.push(Value::Object(entry));
    }
    Value::Array(entries)
}

fn name_of(points: &PointRegistry, id: PointId) -> Option<String> {
    points.point(id).map(|p| p.name().to_owned())
}
