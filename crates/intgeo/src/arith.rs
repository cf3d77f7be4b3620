//! Overflow-checked scalar helpers on `i64`.
//!
//! `i64::MIN` has no representable magnitude, so both helpers reject it
//! instead of wrapping.

use std::fmt;

/// Errors raised by integer and fraction arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithError {
    /// The magnitude of a value does not fit `i64`.
    Overflow { context: &'static str },
    /// Inputs outside the operation's domain (e.g. `gcd(0, 0)`).
    InvalidArgument { reason: &'static str },
}

impl ArithError {
    fn overflow(context: &'static str) -> Self {
        Self::Overflow { context }
    }

    pub(crate) fn invalid(reason: &'static str) -> Self {
        Self::InvalidArgument { reason }
    }
}

impl fmt::Display for ArithError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow { context } => write!(f, "arithmetic overflow: {context}"),
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl std::error::Error for ArithError {}

/// Absolute value of `value`.
///
/// Fails with `Overflow` for `i64::MIN`.
#[inline]
pub fn abs(value: i64) -> Result<i64, ArithError> {
    value
        .checked_abs()
        .ok_or(ArithError::overflow("absolute value does not fit i64"))
}

/// Positive greatest common divisor of `a` and `b` (Euclid on magnitudes).
///
/// `gcd(a, 0) == abs(a)`. Fails with `InvalidArgument` when both inputs are
/// zero and with `Overflow` when either is `i64::MIN`.
pub fn gcd(a: i64, b: i64) -> Result<i64, ArithError> {
    if a == 0 && b == 0 {
        return Err(ArithError::invalid("gcd of two zeros is undefined"));
    }
    if a == i64::MIN {
        return Err(ArithError::overflow("absolute value of the first value does not fit i64"));
    }
    if b == i64::MIN {
        return Err(ArithError::overflow("absolute value of the second value does not fit i64"));
    }
    Ok(euclid(abs(a)?, abs(b)?))
}

/// Euclid's algorithm on non-negative inputs, not both zero.
#[inline]
pub(crate) fn euclid(mut dividend: i64, mut divisor: i64) -> i64 {
    debug_assert!(dividend >= 0 && divisor >= 0);
    while divisor != 0 {
        let rem = dividend % divisor;
        dividend = divisor;
        divisor = rem;
    }
    dividend
}
