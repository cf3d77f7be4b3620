//! Canonical 64-bit fractions.
//!
//! Invariants of every `Fraction64`:
//! - `denominator > 0`;
//! - `gcd(|numerator|, denominator) == 1`;
//! - `numerator != i64::MIN`.
//!
//! Each rational value therefore has exactly one representation, and derived
//! `PartialEq`/`Hash` compare values, not spellings.

use crate::arith::{self, ArithError};

/// Reduced fraction with a positive denominator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fraction64 {
    numerator: i64,
    denominator: i64,
}

impl Fraction64 {
    /// Build from parts that are already canonical; fails with
    /// `InvalidArgument` if any invariant is violated.
    pub fn from_canonical_parts(numerator: i64, denominator: i64) -> Result<Self, ArithError> {
        if numerator == i64::MIN {
            return Err(ArithError::invalid(
                "absolute value of the numerator does not fit i64",
            ));
        }
        if denominator <= 0 {
            return Err(ArithError::invalid("denominator is not positive"));
        }
        if arith::gcd(numerator, denominator)? != 1 {
            return Err(ArithError::invalid("numerator and denominator are not coprime"));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Build from any representation of the fraction.
    ///
    /// Parts need not be coprime and the denominator may be negative, but it
    /// must be nonzero, and neither part may be `i64::MIN`.
    pub fn from_non_canonical_parts(numerator: i64, denominator: i64) -> Result<Self, ArithError> {
        if numerator == i64::MIN {
            return Err(ArithError::invalid(
                "absolute value of the numerator does not fit i64",
            ));
        }
        if denominator == 0 {
            return Err(ArithError::invalid("denominator is zero"));
        }
        if denominator == i64::MIN {
            return Err(ArithError::invalid(
                "absolute value of the denominator does not fit i64",
            ));
        }
        let g = arith::gcd(numerator, denominator)?;
        let reduced_num = if denominator < 0 {
            -(numerator / g)
        } else {
            numerator / g
        };
        let reduced_den = arith::abs(denominator / g)?;
        Self::from_canonical_parts(reduced_num, reduced_den)
    }

    #[inline]
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// True iff the value is a whole number (`denominator == 1`).
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }
}
