//! Exact 2D line geometry on 16-bit integer points.
//!
//! Lines are defined by two lattice points and compared through a canonical
//! descriptor built from reduced fractions, so collinearity and line equality
//! are decided without floating point and without overflow.
//!
//! Layout
//! - `arith`: overflow-checked `abs` and `gcd` on `i64`.
//! - `fraction`: `Fraction64`, a reduced rational with positive denominator.
//! - `point`: `Point2`, the bounded coordinate pair.
//! - `line`: `LineDef` (two defining points) and `Line2` (canonical descriptor).
//! - `sample`: seeded random points and lines for tests and benches.

pub mod api;
pub mod arith;
pub mod fraction;
pub mod line;
pub mod point;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use arith::ArithError;
pub use fraction::Fraction64;
pub use line::{Line2, LineDef, LineError};
pub use point::Point2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::fraction::Fraction64;
    pub use crate::line::{Line2, LineDef, LineError};
    pub use crate::point::Point2;
    pub use crate::sample::{lattice_point_on, random_line_def, random_point, Bounds};
}
