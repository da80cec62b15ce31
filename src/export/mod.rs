//! Read-only exporters over a parsed figure.
//!
//! Both exporters are pure functions of a [`Figure`]: one pass, no
//! mutation, and both render segments through the deduplicated
//! unique-edge view so an undirected edge appears exactly once.

pub mod json;
pub mod text;

use crate::figure::{Figure, Point, PointId, PointRegistry, SegmentGraph};

/// The closed set of model nodes an exporter renders.
///
/// Exporters match on this exhaustively, so adding a node type forces
/// every exporter to handle it. Segment nodes carry the registry because
/// the graph alone holds IDs, not names.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Figure(&'a Figure),
    Points(&'a PointRegistry),
    Segments {
        graph: &'a SegmentGraph,
        points: &'a PointRegistry,
    },
    Point(&'a Point),
}

/// Groups the unique-edge view by from-point, preserving traversal order:
/// one entry per point with at least one canonical outgoing edge.
fn group_unique(graph: &SegmentGraph) -> Vec<(PointId, Vec<PointId>)> {
    let mut groups: Vec<(PointId, Vec<PointId>)> = Vec::new();
    for segment in graph.unique_segments() {
        match groups.iter_mut().find(|(from, _)| *from == segment.from) {
            Some((_, neighbors)) => neighbors.push(segment.to),
            None => groups.push((segment.from, vec![segment.to])),
        }
    }
    groups
}
