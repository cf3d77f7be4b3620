//! Bounded integer points.

use nalgebra::Vector2;

/// Smallest representable coordinate.
pub const COORD_MIN: i16 = i16::MIN;
/// Largest representable coordinate.
pub const COORD_MAX: i16 = i16::MAX;

/// Point with 16-bit coordinates; equality is component-wise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point2 {
    pub x: i16,
    pub y: i16,
}

impl Point2 {
    #[inline]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Coordinates widened to `i32`, the width used for differences.
    #[inline]
    pub(crate) fn widened(self) -> Vector2<i32> {
        Vector2::new(i32::from(self.x), i32::from(self.y))
    }
}

impl From<(i16, i16)> for Point2 {
    #[inline]
    fn from((x, y): (i16, i16)) -> Self {
        Self { x, y }
    }
}

impl From<Point2> for (i16, i16) {
    #[inline]
    fn from(p: Point2) -> Self {
        (p.x, p.y)
    }
}

impl From<Vector2<i16>> for Point2 {
    #[inline]
    fn from(v: Vector2<i16>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point2> for Vector2<i16> {
    #[inline]
    fn from(p: Point2) -> Self {
        Vector2::new(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_preserve_coordinates() {
        let p = Point2::new(-32768, 32767);
        assert_eq!(Point2::from((-32768, 32767)), p);
        assert_eq!(<(i16, i16)>::from(p), (COORD_MIN, COORD_MAX));
        let v: Vector2<i16> = p.into();
        assert_eq!(Point2::from(v), p);
        assert_eq!(p.widened(), Vector2::new(-32768i32, 32767));
    }

    #[test]
    fn equality_is_componentwise() {
        assert_eq!(Point2::new(1, 2), Point2::new(1, 2));
        assert_ne!(Point2::new(1, 2), Point2::new(2, 1));
        assert_eq!(Point2::default(), Point2::new(0, 0));
    }
}
