//! Lines through two lattice points: definitions and canonical descriptors.
//!
//! Purpose
//! - `LineDef` keeps the two defining points and answers membership and
//!   orientation queries exactly.
//! - `Line2` forgets the defining points and keeps only the line's identity,
//!   so two definitions of the same line compare equal.
//!
//! Why this design
//! - Coordinates are `i16`; differences are widened to `i32` and products to
//!   `i64`, so no query can overflow and no query needs division.
//! - `Line2` is a sum type; a line is exactly one of vertical, horizontal or
//!   oblique.
//!
//! Code cross-refs: `fraction::Fraction64`, `point::Point2`.

mod canonical;
mod definition;

pub use canonical::Line2;
pub use definition::{LineDef, LineError};
