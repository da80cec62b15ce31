use std::fmt;
use std::hash::{Hash, Hasher};

use crate::math::{quantize, Point2};

/// Sentinel name for points constructed without one, such as implied
/// intersection points created by downstream consumers.
pub const UNNAMED: &str = "__unnamed";

/// A named 2D point.
///
/// Identity is defined by coordinates alone: two points whose coordinates
/// quantize to the same [`crate::math::TOLERANCE`] grid cell are the same
/// point, whatever their names. The name is metadata carried by whichever
/// instance a registry stored first.
#[derive(Debug, Clone)]
pub struct Point {
    name: String,
    position: Point2,
}

impl Point {
    /// Creates a new named point.
    #[must_use]
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            position: Point2::new(x, y),
        }
    }

    /// Creates a point carrying the sentinel unnamed marker.
    #[must_use]
    pub fn unnamed(x: f64, y: f64) -> Self {
        Self::new(UNNAMED, x, y)
    }

    /// Returns the point's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the X coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Returns the Y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Returns the position as a [`Point2`].
    #[must_use]
    pub fn position(&self) -> &Point2 {
        &self.position
    }
}

// Equality and hashing go through the same quantization step; see
// `math::quantize`. Comparing the quantized bit patterns keeps the two
// consistent and makes -0.0 a non-issue.
impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        quantize(self.x()).to_bits() == quantize(other.x()).to_bits()
            && quantize(self.y()).to_bits() == quantize(other.y()).to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        quantize(self.x()).to_bits().hash(state);
        quantize(self.y()).to_bits().hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.name, self.x(), self.y())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn equality_ignores_name() {
        let a = Point::new("A", 1.0, 2.0);
        let b = Point::new("B", 1.0, 2.0);
        assert_eq!(a, b);
    }

    #[test]
    fn equality_within_tolerance() {
        let a = Point::new("A", 1.0, 2.0);
        let b = Point::new("A", 1.0 + TOLERANCE / 100.0, 2.0);
        assert_eq!(a, b);
    }

    #[test]
    fn inequality_beyond_tolerance() {
        let a = Point::new("A", 1.0, 2.0);
        let b = Point::new("A", 1.0 + TOLERANCE * 100.0, 2.0);
        assert_ne!(a, b);
    }

    #[test]
    fn equal_points_collapse_in_a_set() {
        let mut set = HashSet::new();
        set.insert(Point::new("A", 0.25, 0.75));
        set.insert(Point::new("B", 0.25 + TOLERANCE / 100.0, 0.75));
        assert_eq!(set.len(), 1);

        set.insert(Point::new("C", 0.25, 0.5));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn unnamed_uses_sentinel() {
        let p = Point::unnamed(3.0, 4.0);
        assert_eq!(p.name(), UNNAMED);
    }

    #[test]
    fn display_renders_name_and_coordinates() {
        let p = Point::new("A", 1.0, 0.5);
        assert_eq!(p.to_string(), "A(1, 0.5)");
    }
}
