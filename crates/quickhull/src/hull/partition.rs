use super::orient::orientation;
use super::types::{DirectedLine, EndpointFilter, Point};

/// Points strictly right of `line`, in input order, using the default filter.
pub fn right_subset(points: &[Point], line: &DirectedLine) -> Vec<Point> {
    right_subset_with(points, line, EndpointFilter::default())
}

/// Points strictly right of `line`, in input order.
///
/// A point matching either endpoint under `filter` is skipped before the
/// orientation test.
pub fn right_subset_with(
    points: &[Point],
    line: &DirectedLine,
    filter: EndpointFilter,
) -> Vec<Point> {
    points
        .iter()
        .copied()
        .filter(|&p| !filter.matches(p, line.p1) && !filter.matches(p, line.p2))
        .filter(|&p| orientation(line, p) > 0.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn diag() -> DirectedLine {
        DirectedLine::new(vector![0.0, 0.0], vector![4.0, 4.0])
    }

    #[test]
    fn keeps_input_order_and_strict_side() {
        let pts = vec![
            vector![3.0, 3.5],
            vector![1.0, 0.0], // left
            vector![2.0, 2.0], // collinear
            vector![1.0, 3.0],
        ];
        let sub = right_subset(&pts, &diag());
        assert_eq!(sub, vec![vector![3.0, 3.5], vector![1.0, 3.0]]);
    }

    #[test]
    fn same_x_filter_drops_points_sharing_endpoint_x() {
        // (0,3) is right of the line but shares x with p1.
        let pts = vec![vector![0.0, 3.0], vector![1.0, 3.0]];
        let exact = right_subset_with(&pts, &diag(), EndpointFilter::Exact);
        let same_x = right_subset_with(&pts, &diag(), EndpointFilter::SameX);
        assert_eq!(exact.len(), 2);
        assert_eq!(same_x, vec![vector![1.0, 3.0]]);
    }

    #[test]
    fn endpoints_never_included() {
        let l = diag();
        let pts = vec![l.p1, l.p2, l.p1];
        assert!(right_subset(&pts, &l).is_empty());
        assert!(right_subset_with(&pts, &l, EndpointFilter::SameX).is_empty());
    }
}
