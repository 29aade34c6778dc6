//! Folding significant digits into a bounded mantissa.

use super::digit::to_digit;
use super::exponent::into_i32;
use crate::literal::DecimalLiteral;
use core::cmp;

/// Maximum number of significant digits kept in a [`Mantissa`].
///
/// 18 decimal digits always fit in a `u64` with room to multiply by ten once
/// more.
pub const DIGIT_BUDGET: u32 = 18;

/// Significant digits of a literal and the power of ten that scales them.
///
/// The magnitude of the literal is `value * 10^exponent`, up to the digits
/// that did not fit in the budget. `value` has exactly `figures` decimal
/// digits, the first of them nonzero, so `figures == 0` means the literal is
/// exactly zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Mantissa {
    /// The significant digits as an integer.
    pub value: u64,
    /// How many digits `value` holds, at most [`DIGIT_BUDGET`].
    pub figures: u32,
    /// Power of ten by which `value` is scaled.
    pub exponent: i32,
}

/// Strategy for turning a delimited literal into a [`Mantissa`].
///
/// Implementations are interchangeable: the strict parser runs the same lexer
/// and the same scaling step whichever strategy it is given.
pub trait Accumulate {
    /// Fold the digits of `literal`, ignoring its sign.
    fn accumulate(&self, literal: &DecimalLiteral) -> Mantissa;
}

impl<'a, A> Accumulate for &'a A
where
    A: ?Sized + Accumulate,
{
    #[inline]
    fn accumulate(&self, literal: &DecimalLiteral) -> Mantissa {
        (**self).accumulate(literal)
    }
}

/// Keep the first 18 significant digits and ignore the rest.
#[derive(Copy, Clone, Debug, Default)]
pub struct Truncate;

impl Accumulate for Truncate {
    fn accumulate(&self, literal: &DecimalLiteral) -> Mantissa {
        // Leading zeros of the integer part carry no significance.
        let zeros = literal.integer.iter().take_while(|&&c| c == b'0').count();
        let integer = &literal.integer[zeros..];
        let mut fraction = literal.fraction;
        let mut exponent = literal.exponent;

        // With no integer significance, each leading zero of the fraction
        // shifts the first significant digit one place to the right.
        if integer.is_empty() {
            let zeros = fraction.iter().take_while(|&&c| c == b'0').count();
            exponent = exponent.saturating_sub(into_i32(zeros));
            fraction = &fraction[zeros..];
        }

        let budget = DIGIT_BUDGET as usize;
        let mut value: u64 = 0;

        // Integer digits past the budget are dropped, each still multiplying
        // the result by ten.
        let kept = cmp::min(integer.len(), budget);
        for &c in &integer[..kept] {
            value = value * 10 + to_digit(c);
        }
        exponent = exponent.saturating_add(into_i32(integer.len() - kept));

        // Fraction digits past the budget are below the retained precision.
        let kept_fraction = cmp::min(fraction.len(), budget - kept);
        for &c in &fraction[..kept_fraction] {
            value = value * 10 + to_digit(c);
        }
        exponent = exponent.saturating_sub(into_i32(kept_fraction));

        Mantissa {
            value,
            figures: (kept + kept_fraction) as u32,
            exponent,
        }
    }
}

/// Truncate, then move as much scale as possible into the mantissa.
///
/// A positive exponent is pulled into the mantissa while the budget allows,
/// and trailing decimal zeros are divided out while the exponent is negative.
/// The scaling step then works with the smallest power of ten it can, which
/// loses less precision for literals like `1.50000e-7` or `25e3`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Renormalize;

impl Accumulate for Renormalize {
    fn accumulate(&self, literal: &DecimalLiteral) -> Mantissa {
        let mut mantissa = Truncate.accumulate(literal);
        if mantissa.figures == 0 {
            return mantissa;
        }

        while mantissa.exponent > 0 && mantissa.figures < DIGIT_BUDGET {
            mantissa.value *= 10;
            mantissa.exponent -= 1;
            mantissa.figures += 1;
        }

        // Cannot loop forever: a nonzero value has a nonzero digit.
        while mantissa.exponent < 0 && mantissa.value % 10 == 0 {
            mantissa.value /= 10;
            mantissa.exponent += 1;
            mantissa.figures -= 1;
        }

        mantissa
    }
}

/// Run-time choice between the two accumulation strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Precision {
    /// Use [`Truncate`].
    Truncate,
    /// Use [`Renormalize`].
    Retain,
}

impl Default for Precision {
    /// `Retain` if the crate is built with the `retain_mantissa` feature,
    /// otherwise `Truncate`.
    fn default() -> Self {
        if cfg!(feature = "retain_mantissa") {
            Precision::Retain
        } else {
            Precision::Truncate
        }
    }
}

impl Accumulate for Precision {
    #[inline]
    fn accumulate(&self, literal: &DecimalLiteral) -> Mantissa {
        match self {
            Precision::Truncate => Truncate.accumulate(literal),
            Precision::Retain => Renormalize.accumulate(literal),
        }
    }
}
