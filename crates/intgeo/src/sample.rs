//! Seeded random points and line definitions.
//!
//! Purpose
//! - Feed property tests and benches with reproducible inputs.
//! - Produce further lattice points on a given line, so that different
//!   definitions of the same line can be built on purpose.

use rand::Rng;

use crate::arith;
use crate::line::LineDef;
use crate::point::{Point2, COORD_MAX, COORD_MIN};

/// Inclusive coordinate range applied to both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: i16,
    pub max: i16,
}

impl Bounds {
    /// Whole `i16` domain.
    pub const FULL: Bounds = Bounds {
        min: COORD_MIN,
        max: COORD_MAX,
    };

    /// Symmetric range `[-r, r]`; `r` is clamped to `0..=COORD_MAX`.
    pub fn symmetric(r: i16) -> Self {
        let r = r.clamp(0, COORD_MAX);
        Self { min: -r, max: r }
    }

    /// Endpoints in either order.
    pub fn new(a: i16, b: i16) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::FULL
    }
}

/// Uniform point in `bounds`.
pub fn random_point<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds) -> Point2 {
    Point2::new(
        rng.gen_range(bounds.min..=bounds.max),
        rng.gen_range(bounds.min..=bounds.max),
    )
}

/// Line through two distinct uniform points in `bounds`.
///
/// Returns `None` when `bounds` holds a single point.
pub fn random_line_def<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds) -> Option<LineDef> {
    if bounds.min == bounds.max {
        return None;
    }
    let p1 = random_point(rng, bounds);
    loop {
        let p2 = random_point(rng, bounds);
        if let Ok(def) = LineDef::new(p1, p2) {
            return Some(def);
        }
    }
}

/// `point1 + k · step`, where `step` is the primitive lattice direction of
/// the line (direction divided by the gcd of its components).
///
/// Returns `None` when the point leaves the `i16` domain.
pub fn lattice_point_on(def: &LineDef, k: i64) -> Option<Point2> {
    let d = def.direction().map(i64::from);
    // Distinct defining points: d != 0.
    let g = arith::euclid(d.x.abs(), d.y.abs());
    let (sx, sy) = (d.x / g, d.y / g);
    let p1 = def.point1();
    let x = i64::from(p1.x).checked_add(k.checked_mul(sx)?)?;
    let y = i64::from(p1.y).checked_add(k.checked_mul(sy)?)?;
    Some(Point2::new(i16::try_from(x).ok()?, i16::try_from(y).ok()?))
}
