//! Free-form decimal grammar in the manner of a C `strtod`.
//!
//! The accepted form is `[ws] [+|-] I [. F] [(e|E) [+|-] X]` where either of
//! `I` or `F` may be empty, but not both. Parsing never fails: a string with
//! no number consumes nothing and yields zero.

use crate::lexical::{self, fold_exponent_saturating, Accumulate, Truncate};
use crate::literal::DecimalLiteral;
use crate::read::SliceRead;

/// Outcome of [`parse_lenient_checked`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LenientNumber {
    /// The parsed value, or `0.0` if no number was found.
    pub value: f64,
    /// Number of bytes consumed, including leading whitespace and sign. Zero
    /// if no number was found.
    pub len: usize,
    /// The decimal exponent exceeded what binary exponentiation handles and
    /// was clamped. The value has overflowed to infinity or underflowed to
    /// zero. This is the analogue of `strtod` setting `ERANGE`.
    pub out_of_range: bool,
}

/// Parse a number at the start of `text` the way a classic `strtod` does.
///
/// Returns the value and the number of bytes consumed:
///
/// - Leading whitespace and a single `+` or `-` are skipped.
/// - If no digits follow, nothing is consumed and the value is zero.
/// - An `e` or `E` that is not followed by a valid exponent is left
///   unconsumed, and the number is read as if it had no exponent.
///
/// ```
/// use json_strtod::parse_lenient;
///
/// assert_eq!(parse_lenient(" 3.14abc"), (3.14, 5));
/// assert_eq!(parse_lenient("abc"), (0.0, 0));
/// assert_eq!(parse_lenient("5e"), (5.0, 1));
/// assert_eq!(parse_lenient(".5e-1;"), (0.05, 5));
/// ```
pub fn parse_lenient<T>(text: &T) -> (f64, usize)
where
    T: ?Sized + AsRef<[u8]>,
{
    let number = parse_lenient_checked(text);
    (number.value, number.len)
}

/// Like [`parse_lenient`], also reporting whether the exponent was out of
/// range.
///
/// ```
/// use json_strtod::parse_lenient_checked;
///
/// let number = parse_lenient_checked("1e-999");
/// assert_eq!(number.value, 0.0);
/// assert_eq!(number.len, 6);
/// assert!(number.out_of_range);
/// ```
pub fn parse_lenient_checked<T>(text: &T) -> LenientNumber
where
    T: ?Sized + AsRef<[u8]>,
{
    let mut read = SliceRead::new(text.as_ref());

    while is_space(read.peek_or_nul()) {
        read.discard();
    }

    let negative = match read.peek() {
        Some(b'-') => {
            read.discard();
            true
        }
        Some(b'+') => {
            read.discard();
            false
        }
        _ => false,
    };

    let integer = read.eat_digits();
    let mut fraction: &[u8] = &[];
    if read.peek() == Some(b'.') {
        read.discard();
        fraction = read.eat_digits();
    }

    if integer.is_empty() && fraction.is_empty() {
        // No mantissa: roll back to the very start of the input.
        return LenientNumber {
            value: if negative { -0.0 } else { 0.0 },
            len: 0,
            out_of_range: false,
        };
    }

    let exponent = scan_exponent(&mut read);

    let literal = DecimalLiteral {
        negative,
        integer,
        fraction,
        exponent,
        end: read.index(),
    };
    let mantissa = Truncate.accumulate(&literal);
    let scaled = lexical::binary_exponentiation(&mantissa);

    LenientNumber {
        value: if negative { -scaled.value } else { scaled.value },
        len: literal.end,
        out_of_range: scaled.out_of_range,
    }
}

/// Consume an optional exponent suffix and return its value.
///
/// A marker without digits after it, such as the `e` in `5e` or `5e+x`, is
/// not part of the number: the cursor is put back before the marker and the
/// exponent is zero.
fn scan_exponent(read: &mut SliceRead) -> i32 {
    let marker = read.index();
    if !matches!(read.peek(), Some(b'e' | b'E')) {
        return 0;
    }
    read.discard();

    let negative = match read.peek() {
        Some(b'-') => {
            read.discard();
            true
        }
        Some(b'+') => {
            read.discard();
            false
        }
        _ => false,
    };

    let digits = read.eat_digits();
    if digits.is_empty() {
        read.rewind(marker);
        return 0;
    }

    let exponent = fold_exponent_saturating(digits);
    if negative {
        -exponent
    } else {
        exponent
    }
}

// Whitespace as classified by `isspace` in the C locale.
#[inline]
fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}
