use std::collections::HashSet;

use slotmap::SecondaryMap;

use super::registry::PointId;

/// One directed adjacency entry from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub from: PointId,
    pub to: PointId,
}

impl Segment {
    /// Creates a new directed segment entry.
    #[must_use]
    pub fn new(from: PointId, to: PointId) -> Self {
        Self { from, to }
    }

    /// Returns the same segment in the opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

/// Undirected segment graph over registry points.
///
/// Each undirected edge is stored as two directed entries, A→B and B→A,
/// so the adjacency list of every endpoint mentions the other. IDs are
/// only meaningful against the registry the figure owns.
#[derive(Debug, Default)]
pub struct SegmentGraph {
    adjacency: SecondaryMap<PointId, Vec<PointId>>,
}

impl SegmentGraph {
    /// Creates a new, empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn add_directed_edge(&mut self, from: PointId, to: PointId) {
        if !self.adjacency.contains_key(from) {
            self.adjacency.insert(from, Vec::new());
        }
        if let Some(neighbors) = self.adjacency.get_mut(from) {
            if !neighbors.contains(&to) {
                neighbors.push(to);
            }
        }
    }

    /// Adds an undirected edge between `a` and `b`.
    ///
    /// Idempotent: repeating the call with the same pair (in either order)
    /// changes nothing.
    pub fn add_undirected_edge(&mut self, a: PointId, b: PointId) {
        self.add_directed_edge(a, b);
        self.add_directed_edge(b, a);
    }

    /// Adds an undirected edge from `p` to each entry of `neighbors`.
    pub fn add_adjacency_list(&mut self, p: PointId, neighbors: &[PointId]) {
        for &q in neighbors {
            self.add_undirected_edge(p, q);
        }
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let directed: usize = self.adjacency.values().map(Vec::len).sum();
        directed / 2
    }

    /// Returns the neighbors of `p` in insertion order.
    #[must_use]
    pub fn neighbors(&self, p: PointId) -> &[PointId] {
        self.adjacency.get(p).map_or(&[], Vec::as_slice)
    }

    /// Iterates every directed entry, both directions of each edge.
    pub fn directed_segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.adjacency.iter().flat_map(|(from, neighbors)| {
            neighbors.iter().map(move |&to| Segment::new(from, to))
        })
    }

    /// Iterates each undirected edge exactly once.
    ///
    /// The canonical direction is whichever directed entry the traversal
    /// reaches first, not a total order on points: output is deterministic
    /// for a fixed insertion history. Callers needing stability across
    /// runs must insert edges in a fixed order.
    pub fn unique_segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let mut emitted: HashSet<Segment> = HashSet::new();
        self.directed_segments().filter(move |segment| {
            if emitted.contains(&segment.reversed()) {
                false
            } else {
                emitted.insert(*segment);
                true
            }
        })
    }
}
