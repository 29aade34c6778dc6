//! Fast, bounded decimal-to-float arithmetic.
//!
//! Everything in here works on digit runs that a lexer has already delimited.
//! Digits are folded into a 64-bit mantissa of at most 18 significant digits
//! and the result is scaled by precomputed powers of ten. We care about a
//! single pass with no allocation more than about exact rounding of every
//! possible literal, so results carry a small bounded error.

// MODULES
mod combine;
mod digit;
mod exponent;
mod mantissa;
mod pow10;

// API
pub(crate) use self::combine::{binary_exponentiation, bounded_table};
pub(crate) use self::digit::{add_digit, is_digit};
pub(crate) use self::exponent::{fold_exponent, fold_exponent_saturating};
pub use self::mantissa::{Accumulate, Mantissa, Precision, Renormalize, Truncate, DIGIT_BUDGET};
