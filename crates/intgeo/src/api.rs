//! Curated re-exports for callers that want one import path.
//!
//! Keep this list in sync with the public items of `arith`, `fraction`,
//! `point`, `line` and `sample`.

// Scalar helpers
pub use crate::arith::{abs, gcd, ArithError};
// Exact rationals
pub use crate::fraction::Fraction64;
// Points and lines
pub use crate::line::{Line2, LineDef, LineError};
pub use crate::point::{Point2, COORD_MAX, COORD_MIN};
// Random inputs
pub use crate::sample::{lattice_point_on, random_line_def, random_point, Bounds};
