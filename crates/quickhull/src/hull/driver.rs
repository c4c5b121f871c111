use super::expand::find_hull_with;
use super::partition::right_subset_with;
use super::types::{DirectedLine, HullCfg, Point};
use crate::error::HullError;

/// First minimal-x and first maximal-x points (strict comparisons).
///
/// Trackers start from the first input point, so all-negative or all-positive
/// coordinate ranges behave the same. `None` for empty input.
pub fn extreme_x(points: &[Point]) -> Option<(Point, Point)> {
    let first = *points.first()?;
    let (mut lo, mut hi) = (first, first);
    for &p in &points[1..] {
        if p.x < lo.x {
            lo = p;
        }
        if p.x > hi.x {
            hi = p;
        }
    }
    Some((lo, hi))
}

/// First minimal-y and first maximal-y points, same tie rule as `extreme_x`.
fn extreme_y(points: &[Point]) -> Option<(Point, Point)> {
    let first = *points.first()?;
    let (mut lo, mut hi) = (first, first);
    for &p in &points[1..] {
        if p.y < lo.y {
            lo = p;
        }
        if p.y > hi.y {
            hi = p;
        }
    }
    Some((lo, hi))
}

fn distinct_count(points: &[Point], cap: usize) -> usize {
    let mut seen: Vec<Point> = Vec::with_capacity(cap);
    for &p in points {
        if !seen.contains(&p) {
            seen.push(p);
            if seen.len() == cap {
                break;
            }
        }
    }
    seen.len()
}

fn validate(points: &[Point]) -> Result<(), HullError> {
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFiniteCoordinate { index });
    }
    let distinct = distinct_count(points, 3);
    if distinct < 3 {
        return Err(HullError::InsufficientPoints { distinct });
    }
    Ok(())
}

/// Convex hull with the default configuration.
pub fn build_hull(points: &[Point]) -> Result<Vec<Point>, HullError> {
    build_hull_with(points, HullCfg::default())
}

/// Convex hull in clockwise order, starting at the first minimal-x point.
///
/// Collinear inputs succeed with a 2-vertex hull. When every point shares one
/// x there is no directed line `A → B`; the hull is then the segment from the
/// first minimal-y to the first maximal-y point.
pub fn build_hull_with(points: &[Point], cfg: HullCfg) -> Result<Vec<Point>, HullError> {
    validate(points)?;
    let (a, b) = extreme_x(points).ok_or(HullError::InsufficientPoints { distinct: 0 })?;
    if a == b {
        let (lo, hi) = extreme_y(points).ok_or(HullError::InsufficientPoints { distinct: 0 })?;
        tracing::debug!(x = a.x, n = points.len(), "vertical input, segment hull");
        return Ok(vec![lo, hi]);
    }
    let filter = cfg.endpoint_filter;
    let ab = DirectedLine::new(a, b);
    let ba = ab.reversed();
    let upper = right_subset_with(points, &ab, filter);
    let lower = right_subset_with(points, &ba, filter);
    tracing::debug!(
        n = points.len(),
        upper = upper.len(),
        lower = lower.len(),
        ?filter,
        "seeding hull"
    );

    let mut hull = vec![a, b];
    find_hull_with(&mut hull, &upper, ab, filter)?;
    find_hull_with(&mut hull, &lower, ba, filter)?;
    tracing::debug!(vertices = hull.len(), "hull built");
    Ok(hull)
}
