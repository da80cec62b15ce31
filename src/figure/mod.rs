pub mod graph;
pub mod point;
pub mod registry;

pub use graph::{Segment, SegmentGraph};
pub use point::Point;
pub use registry::{PointId, PointRegistry};

/// A parsed figure: a description plus point and segment data.
///
/// Each figure exclusively owns one registry and one graph; the graph's
/// IDs are only meaningful against this figure's registry. Figures are
/// created by a successful parse and immutable afterwards, so a finished
/// figure can be shared read-only.
#[derive(Debug)]
pub struct Figure {
    description: String,
    points: PointRegistry,
    segments: SegmentGraph,
}

impl Figure {
    /// Assembles a figure from its parts.
    #[must_use]
    pub fn new(description: String, points: PointRegistry, segments: SegmentGraph) -> Self {
        Self {
            description,
            points,
            segments,
        }
    }

    /// Returns the description text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the point registry.
    #[must_use]
    pub fn points(&self) -> &PointRegistry {
        &self.points
    }

    /// Returns the segment graph.
    #[must_use]
    pub fn segments(&self) -> &SegmentGraph {
        &self.segments
    }
}
