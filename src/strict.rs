//! Strict JSON number grammar.
//!
//! ```text
//! number   = [ "-" ] int [ frac ] [ exp ]
//! int      = "0" / ( digit1-9 *DIGIT )
//! frac     = "." 1*DIGIT
//! exp      = ( "e" / "E" ) [ "-" / "+" ] 1*DIGIT
//! ```

use crate::error::{Error, ErrorCode, Result};
use crate::lexical::{self, fold_exponent, is_digit, Accumulate, Precision};
use crate::literal::DecimalLiteral;
use crate::read::SliceRead;

/// Longest number, in bytes, that the strict parser accepts.
pub const MAX_LITERAL_LEN: usize = 1_000_000;

/// Parse a JSON number at the start of `text`.
///
/// Returns the value and the number of bytes consumed. Parsing stops at the
/// first byte that cannot continue the number, so `"1.5,2"` yields
/// `(1.5, 3)`. Nothing is skipped before the number, not even whitespace.
///
/// Digits are folded with [`Precision::default()`].
///
/// ```
/// use json_strtod::parse_strict_json_number;
///
/// assert_eq!(parse_strict_json_number("-0.25]").unwrap(), (-0.25, 5));
/// assert_eq!(parse_strict_json_number("1e400").unwrap().0, f64::INFINITY);
/// assert!(parse_strict_json_number("1.").is_err());
/// ```
///
/// # Errors
///
/// Fails if `text` does not begin with a number in the JSON grammar, or if
/// that number spans more than [`MAX_LITERAL_LEN`] bytes. No value is
/// produced in that case.
pub fn parse_strict_json_number<T>(text: &T) -> Result<(f64, usize)>
where
    T: ?Sized + AsRef<[u8]>,
{
    parse_strict_json_number_with(text, &Precision::default())
}

/// Parse a JSON number at the start of `text`, folding digits with the given
/// strategy.
///
/// ```
/// use json_strtod::{parse_strict_json_number_with, Precision, Renormalize};
///
/// let (value, _) = parse_strict_json_number_with("1.20000e-5", &Renormalize).unwrap();
/// assert_eq!(value, 1.2e-5);
///
/// let (value, _) = parse_strict_json_number_with("7", &Precision::Retain).unwrap();
/// assert_eq!(value, 7.0);
/// ```
///
/// # Errors
///
/// Same as [`parse_strict_json_number`].
pub fn parse_strict_json_number_with<T, A>(text: &T, accumulator: &A) -> Result<(f64, usize)>
where
    T: ?Sized + AsRef<[u8]>,
    A: ?Sized + Accumulate,
{
    let mut read = SliceRead::new(text.as_ref());
    let literal = tri!(scan(&mut read));
    Ok((evaluate(&literal, accumulator), literal.end))
}

/// Validate and delimit one JSON number starting at the cursor.
///
/// On success the cursor rests one past the number. On failure its position
/// is unspecified.
pub(crate) fn scan<'a>(read: &mut SliceRead<'a>) -> Result<DecimalLiteral<'a>> {
    let start = read.index();

    let negative = read.peek() == Some(b'-');
    if negative {
        read.discard();
    }

    let integer = match read.peek_or_nul() {
        b'0' => {
            // There can be only one leading '0'.
            if is_digit(read.peek_ahead_or_nul(1)) {
                read.discard();
                return Err(read.peek_error(ErrorCode::LeadingZero));
            }
            let zero = read.index();
            read.discard();
            read.slice_since(zero)
        }
        b'1'..=b'9' => read.eat_digits(),
        _ => return Err(read.peek_error(ErrorCode::ExpectedNumber)),
    };

    let mut fraction: &[u8] = &[];
    if read.peek() == Some(b'.') {
        read.discard();
        fraction = read.eat_digits();
        if fraction.is_empty() {
            return Err(read.peek_error(ErrorCode::ExpectedFractionDigit));
        }
    }

    let mut exponent = 0;
    if let Some(b'e' | b'E') = read.peek() {
        read.discard();
        let positive_exp = match read.peek() {
            Some(b'+') => {
                read.discard();
                true
            }
            Some(b'-') => {
                read.discard();
                false
            }
            _ => true,
        };

        // Make sure a digit follows the exponent place.
        let digits = read.eat_digits();
        if digits.is_empty() {
            return Err(read.peek_error(ErrorCode::ExpectedExponentDigit));
        }

        exponent = fold_exponent(digits);
        if !positive_exp {
            exponent = -exponent;
        }
    }

    let end = read.index();
    if end - start > MAX_LITERAL_LEN {
        return Err(Error::syntax(ErrorCode::NumberTooLong, start));
    }

    Ok(DecimalLiteral {
        negative,
        integer,
        fraction,
        exponent,
        end,
    })
}

/// Fold and scale a literal produced by `scan`.
pub(crate) fn evaluate<A>(literal: &DecimalLiteral, accumulator: &A) -> f64
where
    A: ?Sized + Accumulate,
{
    let mantissa = accumulator.accumulate(literal);
    let magnitude = lexical::bounded_table(&mantissa);
    if literal.negative {
        -magnitude
    } else {
        magnitude
    }
}
