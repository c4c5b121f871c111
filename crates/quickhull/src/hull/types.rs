//! Basic 2D types and the construction configuration.
//!
//! - `Point`: planar point, plain `Vector2<f64>` (value semantics).
//! - `DirectedLine`: ordered endpoint pair; "right" depends on the order.
//! - `HullCfg` / `EndpointFilter`: how line endpoints are excluded from subsets.

use nalgebra::Vector2;

/// Planar point `(x, y)`.
pub type Point = Vector2<f64>;

/// Directed line `p1 → p2`.
///
/// Invariants:
/// - Orientation is not symmetric: `reversed()` flips which half-plane is right.
/// - `p1 == p2` is representable but yields zero orientation for every point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectedLine {
    pub p1: Point,
    pub p2: Point,
}

impl DirectedLine {
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            p1: self.p2,
            p2: self.p1,
        }
    }
}

/// Which points count as "the same" as a line endpoint during partitioning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EndpointFilter {
    /// Exclude only points equal to an endpoint.
    #[default]
    Exact,
    /// Exclude every point whose x equals either endpoint's x.
    ///
    /// Cheaper than `Exact`, but also drops a non-endpoint point that merely
    /// shares an x-coordinate with an endpoint, so such a vertex can be missed.
    SameX,
}

impl EndpointFilter {
    #[inline]
    pub fn matches(self, p: Point, endpoint: Point) -> bool {
        match self {
            EndpointFilter::Exact => p == endpoint,
            EndpointFilter::SameX => p.x == endpoint.x,
        }
    }
}

/// Hull construction configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HullCfg {
    pub endpoint_filter: EndpointFilter,
}

impl HullCfg {
    /// x-only endpoint filter.
    #[inline]
    pub fn same_x() -> Self {
        Self {
            endpoint_filter: EndpointFilter::SameX,
        }
    }
}
