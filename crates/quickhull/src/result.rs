//! `HullResult`: input points, hull and area built in one step.

use std::fmt;

use crate::error::HullError;
use crate::hull::{self, HullCfg, Point};
use crate::source::PointSource;

/// Frozen result of one hull construction.
///
/// Invariants:
/// - `hull` is clockwise, starts at the first minimal-x input point and only
///   holds input points.
/// - `area` is the shoelace area of `hull`, computed once.
#[derive(Clone, Debug, PartialEq)]
pub struct HullResult {
    points: Vec<Point>,
    hull: Vec<Point>,
    area: f64,
}

impl HullResult {
    /// Build from `(x, y)` pairs with the default configuration.
    pub fn construct<I>(points: I) -> Result<Self, HullError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self::construct_with(points, HullCfg::default())
    }

    pub fn construct_with<I>(points: I, cfg: HullCfg) -> Result<Self, HullError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let points = points.into_iter().map(|(x, y)| Point::new(x, y)).collect();
        Self::from_points(points, cfg)
    }

    /// Build from any point source with the default configuration.
    pub fn construct_from_source<S: PointSource>(source: S) -> Result<Self, HullError> {
        Self::construct_from_source_with(source, HullCfg::default())
    }

    pub fn construct_from_source_with<S: PointSource>(
        source: S,
        cfg: HullCfg,
    ) -> Result<Self, HullError> {
        Self::from_points(source.points()?, cfg)
    }

    fn from_points(points: Vec<Point>, cfg: HullCfg) -> Result<Self, HullError> {
        let hull = hull::build_hull_with(&points, cfg)?;
        let area = hull::area(&hull);
        Ok(Self { points, hull, area })
    }

    #[inline]
    pub fn all_points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn hull(&self) -> &[Point] {
        &self.hull
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Hull collapsed to a segment (all input points collinear, vertical
    /// sets included).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.hull.len() <= 2 || self.area == 0.0
    }

    /// Human-readable listing: all points, then hull points, then the area.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HullResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "All points ({}):", self.points.len())?;
        for p in &self.points {
            writeln!(f, "  ({}, {})", p.x, p.y)?;
        }
        writeln!(f, "Convex hull ({}):", self.hull.len())?;
        for p in &self.hull {
            writeln!(f, "  ({}, {})", p.x, p.y)?;
        }
        write!(f, "Area: {}", self.area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::TextSource;

    #[test]
    fn describe_lists_points_hull_and_area() {
        let r = HullResult::construct([(0.0, 0.0), (4.0, 0.0), (2.0, 3.0), (2.0, 1.0)]).unwrap();
        let text = r.describe();
        let expected = "All points (4):\n  (0, 0)\n  (4, 0)\n  (2, 3)\n  (2, 1)\n\
                        Convex hull (3):\n  (0, 0)\n  (2, 3)\n  (4, 0)\n\
                        Area: 6";
        assert_eq!(text, expected);
    }

    #[test]
    fn from_text_source() {
        let src = TextSource::new("0 0\n0 2\n2 2\n2 0\n1 1\n".as_bytes());
        let r = HullResult::construct_from_source(src).unwrap();
        assert_eq!(r.all_points().len(), 5);
        assert_eq!(r.hull().len(), 4);
        assert!((r.area() - 4.0).abs() < 1e-12);
        assert!(!r.is_degenerate());
    }

    #[test]
    fn vertical_points_are_degenerate_not_errors() {
        let r = HullResult::construct([(2.0, 1.0), (2.0, 5.0), (2.0, 0.0)]).unwrap();
        assert_eq!(r.hull(), &[Point::new(2.0, 0.0), Point::new(2.0, 5.0)]);
        assert_eq!(r.area(), 0.0);
        assert!(r.is_degenerate());
    }

    #[test]
    fn source_errors_propagate() {
        let src = TextSource::new("0 0\n0\n".as_bytes());
        assert!(matches!(
            HullResult::construct_from_source(src),
            Err(HullError::MalformedInput { line: 2, .. })
        ));
    }
}
