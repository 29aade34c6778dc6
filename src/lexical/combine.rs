//! Scaling a mantissa by its power of ten.
//!
//! Both strategies return the unsigned magnitude. The caller applies the sign
//! last so that `-0` comes out as `-0.0`.

use super::mantissa::Mantissa;
use super::pow10::{MAX_POW10, POW10, SQUARED_POW10};

/// Largest decimal exponent magnitude used by binary exponentiation.
///
/// Any exponent this large already produces overflow or underflow for an
/// 18-digit mantissa, so larger ones are clamped to it.
pub(crate) const MAX_EXPONENT: u32 = 511;

/// Smallest decimal exponent at which a one-digit mantissa is still at least
/// half the smallest subnormal. Each extra figure extends the range one
/// decade further down.
const MIN_EXPONENT: i32 = -324;

/// Scale with a single lookup in the linear power-of-ten table.
///
/// The thresholds follow from the range of `f64`:
///
/// - A mantissa of `figures` digits is at least `10^(figures - 1)`, so once
///   `exponent > 309 - figures` the magnitude is at least `10^309`, past
///   `f64::MAX`, and the result is infinity.
/// - Below `10^-308` the table has no entry, so the division is split in two:
///   first by `10^(-exponent - 308)`, then by `10^308`.
/// - Once `exponent <= -324 - figures` the magnitude is below `10^-324`, less
///   than half the smallest subnormal, and the result is zero.
#[inline]
pub(crate) fn bounded_table(mantissa: &Mantissa) -> f64 {
    let value = mantissa.value as f64;
    let figures = mantissa.figures as i32;
    let exponent = mantissa.exponent;

    if figures == 0 || exponent == 0 {
        value
    } else if exponent > MAX_POW10 + 1 - figures {
        f64::INFINITY
    } else if exponent > 0 {
        value * POW10[exponent as usize]
    } else if exponent > -(MAX_POW10 + 1) {
        value / POW10[-exponent as usize]
    } else if exponent > MIN_EXPONENT - figures {
        value / POW10[(-exponent - MAX_POW10) as usize] / POW10[MAX_POW10 as usize]
    } else {
        0.0
    }
}

/// Result of binary exponentiation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Scaled {
    pub value: f64,
    /// The exponent was clamped to `MAX_EXPONENT`: the result has overflowed
    /// to infinity or underflowed to zero.
    pub out_of_range: bool,
}

/// Scale by a power of ten composed from the squared-power table.
///
/// The bits of the exponent magnitude select which of 10, 100, 10^4, ...,
/// 10^256 to multiply into the scale factor. The loop runs at most nine
/// times whatever the exponent.
pub(crate) fn binary_exponentiation(mantissa: &Mantissa) -> Scaled {
    if mantissa.figures == 0 {
        // 0 * inf would be NaN for exponents whose scale overflows.
        return Scaled {
            value: 0.0,
            out_of_range: false,
        };
    }

    let negative = mantissa.exponent < 0;
    let mut exp = mantissa.exponent.unsigned_abs();
    let out_of_range = exp > MAX_EXPONENT;
    if out_of_range {
        exp = MAX_EXPONENT;
    }

    let mut scale = 1.0;
    for &pow in &SQUARED_POW10 {
        if exp == 0 {
            break;
        }
        if exp & 1 != 0 {
            scale *= pow;
        }
        exp >>= 1;
    }

    let fraction = mantissa.value as f64;
    Scaled {
        value: if negative {
            fraction / scale
        } else {
            fraction * scale
        },
        out_of_range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mantissa(value: u64, figures: u32, exponent: i32) -> Mantissa {
        Mantissa {
            value,
            figures,
            exponent,
        }
    }

    #[test]
    fn bounded_table_exact_cases() {
        assert_eq!(bounded_table(&mantissa(0, 0, 250)), 0.0);
        assert_eq!(bounded_table(&mantissa(42, 2, 0)), 42.0);
        assert_eq!(bounded_table(&mantissa(125, 3, 1)), 1250.0);
        assert_eq!(bounded_table(&mantissa(314, 3, -2)), 3.14);
        assert_eq!(bounded_table(&mantissa(1, 1, 308)), 1e308);
        assert_eq!(bounded_table(&mantissa(1, 1, -22)), 1e-22);
    }

    #[test]
    fn bounded_table_overflow() {
        assert_eq!(bounded_table(&mantissa(1, 1, 309)), f64::INFINITY);
        assert_eq!(bounded_table(&mantissa(12, 2, 308)), f64::INFINITY);
        assert_eq!(bounded_table(&mantissa(1, 1, i32::MAX)), f64::INFINITY);

        // Exponent within the table, product overflows on its own.
        assert_eq!(bounded_table(&mantissa(2, 1, 308)), f64::INFINITY);

        // Largest exponent for a full mantissa.
        let m = mantissa(100000000000000000, 18, 291);
        assert!(bounded_table(&m).is_finite());
        let m = mantissa(100000000000000000, 18, 292);
        assert_eq!(bounded_table(&m), f64::INFINITY);
    }

    #[test]
    fn bounded_table_subnormal() {
        // Two-step division.
        let v = bounded_table(&mantissa(1, 1, -320));
        assert!(v > 0.0 && v < f64::MIN_POSITIVE);
        let v = bounded_table(&mantissa(5, 1, -324));
        assert!(v > 0.0, "5e-324 is the smallest subnormal");
        let v = bounded_table(&mantissa(123456789012345678, 18, -340));
        assert!(v > 0.0 && v < f64::MIN_POSITIVE);

        // Past the floor.
        assert_eq!(bounded_table(&mantissa(9, 1, -325)), 0.0);
        assert_eq!(bounded_table(&mantissa(1, 1, i32::MIN)), 0.0);
        assert_eq!(bounded_table(&mantissa(99, 2, -326)), 0.0);
    }

    #[test]
    fn binary_exponentiation_values() {
        let scaled = binary_exponentiation(&mantissa(5, 1, 0));
        assert_eq!(scaled, Scaled { value: 5.0, out_of_range: false });

        let scaled = binary_exponentiation(&mantissa(25, 2, 2));
        assert_eq!(scaled.value, 2500.0);

        let scaled = binary_exponentiation(&mantissa(314, 3, -2));
        assert_eq!(scaled.value, 3.14);

        // 10^22 = 10^16 * 10^4 * 10^2, all exact.
        let scaled = binary_exponentiation(&mantissa(1, 1, 22));
        assert_eq!(scaled.value, 1e22);
    }

    #[test]
    fn binary_exponentiation_clamps() {
        let scaled = binary_exponentiation(&mantissa(1, 1, 600));
        assert_eq!(scaled.value, f64::INFINITY);
        assert!(scaled.out_of_range);

        let scaled = binary_exponentiation(&mantissa(1, 1, -600));
        assert_eq!(scaled.value, 0.0);
        assert!(scaled.out_of_range);

        let scaled = binary_exponentiation(&mantissa(1, 1, i32::MIN));
        assert_eq!(scaled.value, 0.0);
        assert!(scaled.out_of_range);

        // Not clamped, overflows anyway.
        let scaled = binary_exponentiation(&mantissa(1, 1, 400));
        assert_eq!(scaled.value, f64::INFINITY);
        assert!(!scaled.out_of_range);
    }

    #[test]
    fn binary_exponentiation_zero_is_never_nan() {
        let scaled = binary_exponentiation(&mantissa(0, 0, 500));
        assert_eq!(scaled.value, 0.0);
        assert!(!scaled.out_of_range);
    }
}
