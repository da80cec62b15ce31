use crate::figure::{Figure, Point, PointId, PointRegistry, Segment, SegmentGraph};

/// Construction strategy driven by the parser.
///
/// The parser routes every construction decision through one of these
/// methods and never builds model objects itself. The default methods
/// build nothing, so a strategy only overrides what it materializes;
/// `link_segment` carries the one piece of shared behavior, inserting into
/// the graph whenever there is a graph and a segment to insert.
pub trait FigureBuilder {
    /// Builds a single named point.
    fn build_point(&self, _name: &str, _x: f64, _y: f64) -> Option<Point> {
        None
    }

    /// Builds the registry holding the parsed points.
    fn build_point_registry(&self, _points: Vec<Point>) -> Option<PointRegistry> {
        None
    }

    /// Builds an empty segment graph.
    fn build_segment_graph(&self) -> Option<SegmentGraph> {
        None
    }

    /// Builds one directed segment entry.
    fn build_segment(&self, _from: PointId, _to: PointId) -> Option<Segment> {
        None
    }

    /// Registers `segment` in `graph` as an undirected edge.
    fn link_segment(&self, graph: Option<&mut SegmentGraph>, segment: Option<Segment>) {
        if let (Some(graph), Some(segment)) = (graph, segment) {
            graph.add_undirected_edge(segment.from, segment.to);
        }
    }

    /// Assembles the final figure.
    fn build_figure(
        &self,
        _description: &str,
        _points: Option<PointRegistry>,
        _segments: Option<SegmentGraph>,
    ) -> Option<Figure> {
        None
    }
}

/// Validate-only strategy: parsing runs to completion, including all
/// structural and name-resolution checks, but materializes nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBuilder;

impl FigureBuilder for NullBuilder {}

/// Materializing strategy: every build method constructs the real object.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeometryBuilder;

impl FigureBuilder for GeometryBuilder {
    fn build_point(&self, name: &str, x: f64, y: f64) -> Option<Point> {
        Some(Point::new(name, x, y))
    }

    fn build_point_registry(&self, points: Vec<Point>) -> Option<PointRegistry> {
        Some(PointRegistry::from_points(points))
    }

    fn build_segment_graph(&self) -> Option<SegmentGraph> {
        Some(SegmentGraph::new())
    }

    fn build_segment(&self, from: PointId, to: PointId) -> Option<Segment> {
        Some(Segment::new(from, to))
    }

    fn build_figure(
        &self,
        description: &str,
        points: Option<PointRegistry>,
        segments: Option<SegmentGraph>,
    ) -> Option<Figure> {
        Some(Figure::new(description.to_owned(), points?, segments?))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn null_builder_materializes_nothing() {
        let builder = NullBuilder;
        assert!(builder.build_point("A", 0.0, 0.0).is_none());
        assert!(builder.build_point_registry(Vec::new()).is_none());
        assert!(builder.build_segment_graph().is_none());
        assert!(builder.build_figure("", None, None).is_none());
    }

    #[test]
    fn geometry_builder_materializes_everything() {
        let builder = GeometryBuilder;
        let point = builder.build_point("A", 1.0, 2.0).unwrap();
        assert_eq!(point.name(), "A");

        let registry = builder.build_point_registry(vec![point]).unwrap();
        let graph = builder.build_segment_graph().unwrap();
        let figure = builder
            .build_figure("demo", Some(registry), Some(graph))
            .unwrap();
        assert_eq!(figure.description(), "demo");
        assert_eq!(figure.points().len(), 1);
    }

    #[test]
    fn link_segment_inserts_when_both_present() {
        let builder = GeometryBuilder;
        let mut registry = PointRegistry::new();
        let a = registry.insert(Point::new("A", 0.0, 0.0));
        let b = registry.insert(Point::new("B", 1.0, 0.0));

        let mut graph = SegmentGraph::new();
        let segment = builder.build_segment(a, b);
        builder.link_segment(Some(&mut graph), segment);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn link_segment_ignores_missing_parts() {
        let builder = NullBuilder;
        let mut graph = SegmentGraph::new();
        builder.link_segment(Some(&mut graph), None);
        builder.link_segment(None, None);
        assert_eq!(graph.edge_count(), 0);
    }
}
