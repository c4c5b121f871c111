//! Hull expansion: farthest-point insertion and refinement on sub-lines.
//!
//! Model
//! - Every pending line `(p1, p2)` has `p1` already in the hull sequence and
//!   `p2` right after it (cyclically). Inserting the farthest point after `p1`
//!   keeps both new lines adjacent, so the final order does not depend on the
//!   order in which pending lines are processed.
//! - Refinement runs on an explicit LIFO stack instead of native recursion;
//!   `(p1 → far)` is popped before `(far → p2)`, matching the recursive order.

use super::orient::orientation;
use super::partition::right_subset_with;
use super::types::{DirectedLine, EndpointFilter, Point};
use crate::error::HullError;

/// First point maximizing `orientation(line, ·)`; later ties do not replace it.
pub fn farthest_point(points: &[Point], line: &DirectedLine) -> Option<Point> {
    let mut best: Option<(Point, f64)> = None;
    for &p in points {
        let d = orientation(line, p);
        match best {
            Some((_, bd)) if d <= bd => {}
            _ => best = Some((p, d)),
        }
    }
    best.map(|(p, _)| p)
}

/// Insert `p` right after the first occurrence of `after` in `hull`.
fn insert_after(hull: &mut Vec<Point>, after: Point, p: Point) -> Result<(), HullError> {
    let pos = hull
        .iter()
        .position(|&q| q == after)
        .ok_or(HullError::MissingEndpoint { x: after.x, y: after.y })?;
    hull.insert(pos + 1, p);
    Ok(())
}

/// Expand `hull` with every hull vertex right of `line` among `candidates`,
/// using the default endpoint filter.
pub fn find_hull(
    hull: &mut Vec<Point>,
    candidates: &[Point],
    line: DirectedLine,
) -> Result<(), HullError> {
    find_hull_with(hull, candidates, line, EndpointFilter::default())
}

/// Expand `hull` with every hull vertex right of `line` among `candidates`.
///
/// Pre: `line.p1` is present in `hull`.
/// Post: hull vertices right of `line` sit between `line.p1` and `line.p2`,
/// in clockwise order.
pub fn find_hull_with(
    hull: &mut Vec<Point>,
    candidates: &[Point],
    line: DirectedLine,
    filter: EndpointFilter,
) -> Result<(), HullError> {
    let mut stack: Vec<(DirectedLine, Vec<Point>)> = vec![(line, candidates.to_vec())];
    while let Some((line, pool)) = stack.pop() {
        let subset = right_subset_with(&pool, &line, filter);
        let Some(far) = farthest_point(&subset, &line) else {
            continue;
        };
        insert_after(hull, line.p1, far)?;
        tracing::trace!(x = far.x, y = far.y, pool = subset.len(), "hull vertex");
        // Pushed in reverse so `(p1 → far)` is refined first.
        stack.push((DirectedLine::new(far, line.p2), subset.clone()));
        stack.push((DirectedLine::new(line.p1, far), subset));
    }
    Ok(())
}
