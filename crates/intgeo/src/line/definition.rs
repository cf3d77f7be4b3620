//! `LineDef`: an ordered pair of distinct points.
//!
//! Equality of `LineDef` is equality of the defining pair, not of the line.
//! Use `to_line()` or `equals_as_line()` to compare lines.

use std::fmt;

use nalgebra::Vector2;

use super::canonical::Line2;
use crate::arith::ArithError;
use crate::fraction::Fraction64;
use crate::point::Point2;

/// Errors surfaced by line construction and queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineError {
    /// Both defining points are the same point.
    DegenerateInput { point: Point2 },
    /// Query undefined for this line (slope of a vertical line, x-intercept of
    /// a horizontal one).
    Domain { reason: &'static str },
    /// Fraction construction failed.
    Arith(ArithError),
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::DegenerateInput { point } => write!(
                f,
                "points are equal ({}, {}); two equal points do not define a line",
                point.x, point.y
            ),
            LineError::Domain { reason } => write!(f, "domain error: {reason}"),
            LineError::Arith(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LineError::Arith(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ArithError> for LineError {
    fn from(e: ArithError) -> Self {
        LineError::Arith(e)
    }
}

/// Line defined by two distinct points, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineDef {
    point1: Point2,
    point2: Point2,
}

impl LineDef {
    /// Fails with `DegenerateInput` when `point1 == point2`.
    pub fn new(point1: Point2, point2: Point2) -> Result<Self, LineError> {
        if point1 == point2 {
            return Err(LineError::DegenerateInput { point: point1 });
        }
        Ok(Self { point1, point2 })
    }

    #[inline]
    pub fn point1(&self) -> Point2 {
        self.point1
    }

    #[inline]
    pub fn point2(&self) -> Point2 {
        self.point2
    }

    /// Same line, defining points swapped.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            point1: self.point2,
            point2: self.point1,
        }
    }

    /// `point2 - point1`, widened so the 17-bit difference fits.
    #[inline]
    pub fn direction(&self) -> Vector2<i32> {
        self.point2.widened() - self.point1.widened()
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.point1.y == self.point2.y
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.point1.x == self.point2.x
    }

    /// Exact membership test.
    ///
    /// `p` is on the line iff the slopes of (p, point1) and (p, point2) agree,
    /// written as a cross-multiplication so vertical lines need no division.
    /// Both sides vanish when `p` is one of the defining points.
    pub fn has_point(&self, p: Point2) -> bool {
        // i32 differences (17-bit), i64 products (34-bit).
        let d1 = (p.widened() - self.point1.widened()).map(i64::from);
        let d2 = (p.widened() - self.point2.widened()).map(i64::from);
        d1.x * d2.y == d1.y * d2.x
    }

    /// Slope `Δy/Δx` as a canonical fraction.
    ///
    /// Fails with `Domain` for vertical lines.
    pub fn slope(&self) -> Result<Fraction64, LineError> {
        if self.is_vertical() {
            return Err(LineError::Domain {
                reason: "the line is vertical and has no slope",
            });
        }
        let (num, den) = self.slope_parts();
        Ok(Fraction64::from_non_canonical_parts(num, den)?)
    }

    /// x coordinate where the line crosses the x axis.
    ///
    /// Fails with `Domain` for horizontal lines.
    pub fn x_intercept(&self) -> Result<Fraction64, LineError> {
        if self.is_horizontal() {
            return Err(LineError::Domain {
                reason: "the line is horizontal and has no x-intercept",
            });
        }
        let (num, den) = self.x_intercept_parts();
        Ok(Fraction64::from_non_canonical_parts(num, den)?)
    }

    /// Canonical descriptor; equal for all definitions of the same line.
    ///
    /// Oblique parts come from `slope()` and `x_intercept()`, which do not
    /// fail for `i16` points.
    pub fn to_line(&self) -> Result<Line2, LineError> {
        if self.is_vertical() {
            return Ok(Line2::Vertical(self.point1.x));
        }
        if self.is_horizontal() {
            return Ok(Line2::Horizontal(self.point1.y));
        }
        Ok(Line2::Oblique {
            slope: self.slope()?,
            x_intercept: self.x_intercept()?,
        })
    }

    /// True iff both lines are the same geometric line.
    ///
    /// Agrees with `self.to_line()? == other.to_line()?` on all inputs.
    pub fn equals_as_line(&self, other: &LineDef) -> bool {
        self.has_point(other.point1) && self.has_point(other.point2)
    }

    /// `(Δy, Δx)`.
    #[inline]
    fn slope_parts(&self) -> (i64, i64) {
        let d = self.direction();
        (i64::from(d.y), i64::from(d.x))
    }

    /// `(x1·Δy − y1·Δx, Δy)`.
    #[inline]
    fn x_intercept_parts(&self) -> (i64, i64) {
        let d = self.direction().map(i64::from);
        let x1 = i64::from(self.point1.x);
        let y1 = i64::from(self.point1.y);
        (x1 * d.y - y1 * d.x, d.y)
    }
}
