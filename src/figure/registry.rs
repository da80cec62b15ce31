use slotmap::SlotMap;

use super::point::Point;

slotmap::new_key_type! {
    /// Unique identifier for a point in a registry.
    pub struct PointId;
}

/// Insertion-ordered set of unique points.
///
/// Uniqueness is by coordinate identity (see [`Point`]): inserting a point
/// whose coordinates match a stored one returns the existing ID and keeps
/// the first-stored name. Built once from a parsed point list, read-only
/// afterwards.
///
/// Lookups are linear scans, which is fine at the expected scale of a few
/// hundred points.
#[derive(Debug, Default)]
pub struct PointRegistry {
    points: SlotMap<PointId, Point>,
}

impl PointRegistry {
    /// Creates a new, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a list of points, deduplicating by
    /// coordinates.
    #[must_use]
    pub fn from_points(points: Vec<Point>) -> Self {
        let mut registry = Self::new();
        for point in points {
            registry.insert(point);
        }
        registry
    }

    /// Inserts a point, or returns the ID of the coordinate-equal point
    /// already stored.
    pub fn insert(&mut self, point: Point) -> PointId {
        if let Some(id) = self.find_by_coords(point.x(), point.y()) {
            return id;
        }
        self.points.insert(point)
    }

    /// Looks up a point by name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<PointId> {
        self.points
            .iter()
            .find(|(_, p)| p.name() == name)
            .map(|(id, _)| id)
    }

    /// Looks up a point by coordinates, within tolerance.
    #[must_use]
    pub fn find_by_coords(&self, x: f64, y: f64) -> Option<PointId> {
        let probe = Point::unnamed(x, y);
        self.points
            .iter()
            .find(|&(_, p)| *p == probe)
            .map(|(id, _)| id)
    }

    /// Returns the point stored under `id`.
    #[must_use]
    pub fn point(&self, id: PointId) -> Option<&Point> {
        self.points.get(id)
    }

    /// Returns true if a coordinate-equal point is stored.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.find_by_coords(x, y).is_some()
    }

    /// Returns the number of stored points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the registry holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates points in insertion order. The registry never removes, so
    /// slot order is insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, &Point)> {
        self.points.iter()
    }
}
