//! Geometry primitives: [`Point`] and [`Range`].
//!
//! Points address cells of an unbounded grid, so every coordinate is a plain
//! signed integer and no point is ever "out of range". [`Range`] is only used
//! to describe finite regions of that grid: a bounding box, a layout extent,
//! a region to scan.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer grid coordinate.
///
/// Points are hashable value types with no ordering.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `self + d`, or `None` when the result leaves the `i32` plane.
    #[inline]
    pub fn checked_add(self, d: Point) -> Option<Self> {
        Some(Self::new(self.x.checked_add(d.x)?, self.y.checked_add(d.y)?))
    }

    /// Straight-line distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        dx.hypot(dy)
    }

    /// Whether `self` and `other` differ by exactly one step on one axis.
    #[inline]
    pub fn is_cardinal_step(self, other: Point) -> bool {
        let dx = (i64::from(other.x) - i64::from(self.x)).abs();
        let dy = (i64::from(other.y) - i64::from(self.y)).abs();
        dx + dy == 1
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
///
/// All empty ranges are considered equal.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl PartialEq for Range {
    fn eq(&self, other: &Self) -> bool {
        (self.min == other.min && self.max == other.max) || (self.is_empty() && other.is_empty())
    }
}

impl Eq for Range {}

impl Hash for Range {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_empty() {
            Point::ZERO.hash(state);
            Point::ZERO.hash(state);
        } else {
            self.min.hash(state);
            self.max.hash(state);
        }
    }
}

impl Range {
    /// Create a new range from two corners and auto-canonicalize so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// The single-cell range containing only `p`.
    ///
    /// The exclusive bound saturates, so a cell on the `i32::MAX` row or
    /// column yields an empty range.
    #[inline]
    pub fn cell(p: Point) -> Self {
        Self::square(p, 1)
    }

    /// The `size`×`size` square whose top-left cell is `anchor`, cut off
    /// where it would leave the `i32` plane.
    #[inline]
    pub fn square(anchor: Point, size: i32) -> Self {
        Self {
            min: anchor,
            max: Point::new(
                anchor.x.saturating_add(size),
                anchor.y.saturating_add(size),
            ),
        }
    }

    /// Size as a `Point` (width, height).
    #[inline]
    pub fn size(self) -> Point {
        Point::new(self.width(), self.height())
    }

    /// Width of the range, saturating at `i32::MAX`.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x.saturating_sub(self.min.x)
    }

    /// Height of the range, saturating at `i32::MAX`.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y.saturating_sub(self.min.y)
    }

    /// Total number of cells in the range, saturating at `usize::MAX`.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let w = i64::from(self.max.x) - i64::from(self.min.x);
        let h = i64::from(self.max.y) - i64::from(self.min.y);
        usize::try_from(w.saturating_mul(h)).unwrap_or(usize::MAX)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Smallest range that contains both ranges.
    #[inline]
    pub fn union(self, other: Range) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Smallest range that contains `self` and the cell `p`.
    #[inline]
    pub fn include(self, p: Point) -> Self {
        self.union(Self::cell(p))
    }

    /// Row-major iterator over every point in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.y >= self.range.max.y {
            return (0, Some(0));
        }
        let w = i64::from(self.range.max.x) - i64::from(self.range.min.x);
        let in_row = i64::from(self.range.max.x) - i64::from(self.cur.x);
        let rows = i64::from(self.range.max.y) - i64::from(self.cur.y) - 1;
        match usize::try_from(in_row.saturating_add(rows.saturating_mul(w))) {
            Ok(total) => (total, Some(total)),
            Err(_) => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn point_addition() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(a.checked_add(b), Some(Point::new(4, 6)));
        assert_eq!(Point::from((7, -3)), Point::new(7, -3));
    }

    #[test]
    fn checked_add_stops_at_the_plane_edge() {
        let edge = Point::new(i32::MAX, 0);
        assert_eq!(edge.checked_add(Point::new(1, 0)), None);
        assert_eq!(edge.checked_add(Point::new(-1, 1)), Some(Point::new(i32::MAX - 1, 1)));
        assert_eq!(Point::new(0, i32::MIN).checked_add(Point::new(0, -1)), None);
    }

    #[test]
    fn point_distance_is_euclidean() {
        let o = Point::ZERO;
        assert_eq!(o.distance(Point::new(3, 4)), 5.0);
        assert!((o.distance(Point::new(1, 1)) - std::f64::consts::SQRT_2).abs() < 1e-12);
        assert_eq!(Point::new(-2, 0).distance(Point::new(2, 0)), 4.0);
    }

    #[test]
    fn extreme_distances_do_not_overflow() {
        let d = Point::new(i32::MIN, 0).distance(Point::new(i32::MAX, 0));
        assert_eq!(d, f64::from(i32::MAX) - f64::from(i32::MIN));
        assert!(!Point::new(i32::MIN, 0).is_cardinal_step(Point::new(i32::MAX, 0)));
        assert!(Point::new(i32::MAX, 5).is_cardinal_step(Point::new(i32::MAX - 1, 5)));
    }

    #[test]
    fn point_step_kinds() {
        let p = Point::new(4, 4);
        assert!(p.is_cardinal_step(Point::new(4, 5)));
        assert!(!p.is_cardinal_step(Point::new(5, 5)));
        assert!(!p.is_cardinal_step(Point::new(4, 6)));
    }

    #[test]
    fn points_hash_by_value() {
        let mut set = HashSet::new();
        set.insert(Point::new(-1, 5));
        set.insert(Point::new(-1, 5));
        set.insert(Point::new(5, -1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn range_basics() {
        let r = Range::new(0, 0, 3, 2);
        assert_eq!(r.size(), Point::new(3, 2));
        assert!(!r.is_empty());
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, 2)));
    }

    #[test]
    fn range_auto_canonicalize() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r.min, Point::new(0, 0));
        assert_eq!(r.max, Point::new(3, 2));
    }

    #[test]
    fn range_square_is_anchored_top_left() {
        let r = Range::square(Point::new(-2, 5), 3);
        assert_eq!(r.len(), 9);
        assert!(r.contains(Point::new(-2, 5)));
        assert!(r.contains(Point::new(0, 7)));
        assert!(!r.contains(Point::new(1, 7)));
        assert!(!r.contains(Point::new(-3, 5)));
    }

    #[test]
    fn range_include_grows_bounding_box() {
        let r = Range::default()
            .include(Point::new(2, 2))
            .include(Point::new(-1, 4));
        assert_eq!(r, Range::new(-1, 2, 3, 5));
        assert_eq!(r.include(Point::new(0, 3)), r);
    }

    #[test]
    fn range_iter_count() {
        let r = Range::new(0, 0, 3, 2);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[5], Point::new(2, 1));
        assert_eq!(r.iter().size_hint(), (6, Some(6)));
    }

    #[test]
    fn ranges_saturate_at_the_plane_edge() {
        let top = Point::new(i32::MAX, 3);
        assert!(Range::cell(top).is_empty());
        assert_eq!(Range::square(Point::new(i32::MAX - 1, 0), 4).len(), 4);

        let r = Range::cell(Point::new(i32::MIN, 0)).include(Point::new(i32::MAX - 1, 0));
        assert_eq!(r.width(), i32::MAX);
        assert_eq!(r.len(), u32::MAX as usize);
        assert_eq!(r.include(top), r);
    }

    #[test]
    fn empty_ranges_compare_and_hash_equal() {
        let a = Range::default();
        let b = Range {
            min: Point::new(5, 5),
            max: Point::new(5, 5),
        };
        assert_eq!(a, b);
        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert_eq!(b.iter().count(), 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let p = Point::new(-3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
