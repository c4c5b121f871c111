//! Orientation predicate for a point against a directed line.

use super::types::{DirectedLine, Point};

/// Position of a point relative to a directed line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Right,
    Collinear,
    Left,
}

/// Twice the signed area of the triangle `(line.p1, line.p2, p)`.
///
/// `> 0` means `p` is right of the line, `< 0` left, `0` collinear.
/// Plain `f64` arithmetic, no epsilon: ties are decided by exact comparison.
#[inline]
pub fn orientation(line: &DirectedLine, p: Point) -> f64 {
    (line.p2.x - line.p1.x) * (p.y - line.p1.y) - (line.p2.y - line.p1.y) * (p.x - line.p1.x)
}

#[inline]
pub fn side_of(line: &DirectedLine, p: Point) -> Side {
    let v = orientation(line, p);
    if v > 0.0 {
        Side::Right
    } else if v < 0.0 {
        Side::Left
    } else {
        Side::Collinear
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn sign_follows_direction() {
        let l = DirectedLine::new(vector![0.0, 0.0], vector![2.0, 0.0]);
        assert_eq!(orientation(&l, vector![1.0, 1.0]), 2.0);
        assert_eq!(side_of(&l, vector![1.0, 1.0]), Side::Right);
        assert_eq!(side_of(&l, vector![1.0, -1.0]), Side::Left);
        assert_eq!(side_of(&l, vector![5.0, 0.0]), Side::Collinear);
        // flipping the line flips the side
        assert_eq!(side_of(&l.reversed(), vector![1.0, 1.0]), Side::Left);
    }

    #[test]
    fn endpoints_are_exactly_collinear() {
        let l = DirectedLine::new(vector![0.3, -1.7], vector![2.9, 4.1]);
        assert_eq!(orientation(&l, l.p1), 0.0);
        assert_eq!(orientation(&l, l.p2), 0.0);
    }
}
