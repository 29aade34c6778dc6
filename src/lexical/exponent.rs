//! Utilities to calculate exponents.

use super::digit::to_digit;

/// Exponent digits stop being folded in once the exponent reaches this value.
///
/// Any decimal exponent this large already forces overflow to infinity or
/// underflow to zero, so the remaining digits are consumed without changing
/// the result. Only valid where the literal is at most a million bytes long:
/// the digit shift then stays below the clamp and cannot flip the sign of the
/// net exponent.
pub(crate) const MAX_EXPONENT_FOLD: i32 = 2_000_000;

/// Convert usize into i32 without overflow.
///
/// This is needed to ensure when adjusting the exponent relative to
/// the mantissa we do not overflow for comically-long inputs.
#[inline]
pub(crate) fn into_i32(value: usize) -> i32 {
    if value > i32::MAX as usize {
        i32::MAX
    } else {
        value as i32
    }
}

/// Fold a non-empty run of exponent digits into its magnitude.
///
/// Folding stops at `MAX_EXPONENT_FOLD`, so the largest result is
/// `1_999_999 * 10 + 9`.
pub(crate) fn fold_exponent(digits: &[u8]) -> i32 {
    let mut exp: i32 = 0;
    for &c in digits {
        if exp >= MAX_EXPONENT_FOLD {
            break;
        }
        exp = exp * 10 + to_digit(c) as i32;
    }
    exp
}

/// Fold a non-empty run of exponent digits, saturating at `i32::MAX`.
///
/// For literals of unbounded length. The mantissa shift is applied with
/// saturating arithmetic too, so the net exponent keeps its sign unless the
/// digit run itself is longer than `i32::MAX`.
pub(crate) fn fold_exponent_saturating(digits: &[u8]) -> i32 {
    let mut exp: i32 = 0;
    for &c in digits {
        match exp
            .checked_mul(10)
            .and_then(|exp| exp.checked_add(to_digit(c) as i32))
        {
            Some(next) => exp = next,
            None => return i32::MAX,
        }
    }
    exp
}
