use super::types::Point;

/// Shoelace area of the closed polygon `hull` (last vertex joins the first).
///
/// Sign follows winding and is not normalized: the clockwise sequences from
/// `build_hull` give a non-negative value. Fewer than 3 vertices give 0.
pub fn area(hull: &[Point]) -> f64 {
    let n = hull.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    let mut j = n - 1;
    for i in 0..n {
        sum += (hull[j].x + hull[i].x) * (hull[j].y - hull[i].y);
        j = i;
    }
    sum / 2.0
}
