//! `Line2`: canonical, directly comparable line descriptor.

use crate::fraction::Fraction64;
use crate::point::Point2;

/// Identity of a line, independent of the points that defined it.
///
/// Invariant: two `LineDef`s produce equal `Line2` values iff they describe the
/// same geometric line. Obtain values through `LineDef::to_line`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Line2 {
    /// `x = c`.
    Vertical(i16),
    /// `y = c`.
    Horizontal(i16),
    /// Neither axis-parallel: slope plus the x-axis crossing.
    Oblique {
        slope: Fraction64,
        x_intercept: Fraction64,
    },
}

impl Line2 {
    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self, Line2::Vertical(_))
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Line2::Horizontal(_))
    }

    /// Exact membership test against the descriptor.
    ///
    /// Oblique case: with `m = a/b` and `x0 = c/d` in lowest terms, `p` lies on
    /// `y = m (x − x0)` iff `y·b·d == a·(x·d − c)`. Coprimality forces `d | a`
    /// and `b | (x·d − c)`, leaving `y == (a/d)·((x·d − c)/b)`. Everything is
    /// evaluated in `i128`; a product that overflows cannot equal an `i16`.
    pub fn contains(&self, p: Point2) -> bool {
        match *self {
            Line2::Vertical(x) => p.x == x,
            Line2::Horizontal(y) => p.y == y,
            Line2::Oblique { slope, x_intercept } => {
                let a = i128::from(slope.numerator());
                let b = i128::from(slope.denominator());
                let c = i128::from(x_intercept.numerator());
                let d = i128::from(x_intercept.denominator());
                if a % d != 0 {
                    return false;
                }
                // |x·d − c| < 2^80.
                let t = i128::from(p.x) * d - c;
                if t % b != 0 {
                    return false;
                }
                (a / d)
                    .checked_mul(t / b)
                    .is_some_and(|y| y == i128::from(p.y))
            }
        }
    }
}
