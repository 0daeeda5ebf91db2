use clearpath_core::Point;

use crate::config::Heuristic;

/// Manhattan (L1) distance between two points. Widened to `i64` so any
/// pair of `i32` coordinates fits.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i64 {
    (i64::from(a.x) - i64::from(b.x)).abs() + (i64::from(a.y) - i64::from(b.y)).abs()
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    a.distance(b)
}

impl Heuristic {
    /// Estimated remaining cost between `from` and `to`.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> f64 {
        match self {
            Self::Manhattan => manhattan(from, to) as f64,
            Self::Euclidean => euclidean(from, to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics() {
        let a = Point::new(1, -2);
        let b = Point::new(4, 2);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(euclidean(a, b), 5.0);
        assert_eq!(Heuristic::Manhattan.estimate(a, b), 7.0);
        assert_eq!(Heuristic::Euclidean.estimate(b, a), 5.0);
    }

    #[test]
    fn metrics_span_the_whole_plane() {
        let a = Point::new(i32::MIN, i32::MIN);
        let b = Point::new(i32::MAX, i32::MAX);
        assert_eq!(manhattan(a, b), 2 * (i64::from(u32::MAX)));
        assert_eq!(Heuristic::Manhattan.estimate(a, b), 2.0 * f64::from(u32::MAX));
    }
}
