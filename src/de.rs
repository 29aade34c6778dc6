//! Deserialize a single JSON number into any Rust type that accepts one.

use crate::error::{Error, ErrorCode, Result};
use crate::lexical::{add_digit, Precision};
use crate::literal::DecimalLiteral;
use crate::read::SliceRead;
use crate::strict;
use serde::de;

//////////////////////////////////////////////////////////////////////////////

/// A structure that deserializes one JSON number into Rust values.
///
/// Integral literals that fit are handed to the visitor as `u64` or `i64`;
/// everything else goes through the strict parser and arrives as `f64`.
///
/// ```
/// use json_strtod::{Deserializer, Precision};
/// use serde::Deserialize;
///
/// let mut de = Deserializer::from_str("1.25e3 ");
/// de.set_precision(Precision::Retain);
/// let value = f64::deserialize(&mut de).unwrap();
/// de.end().unwrap();
/// assert_eq!(value, 1250.0);
/// ```
pub struct Deserializer<'de> {
    read: SliceRead<'de>,
    precision: Precision,
}

impl<'de> Deserializer<'de> {
    /// Creates a deserializer from a `&[u8]`.
    pub fn from_slice(bytes: &'de [u8]) -> Self {
        Deserializer {
            read: SliceRead::new(bytes),
            precision: Precision::default(),
        }
    }

    /// Creates a deserializer from a `&str`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &'de str) -> Self {
        Deserializer::from_slice(s.as_bytes())
    }

    /// Choose how digits of non-integral numbers are folded.
    pub fn set_precision(&mut self, precision: Precision) {
        self.precision = precision;
    }

    /// The `Deserializer::end` method should be called after a value has been
    /// fully deserialized. This allows the `Deserializer` to validate that
    /// the input is at the end or that it only has trailing whitespace.
    pub fn end(&mut self) -> Result<()> {
        self.parse_whitespace();
        match self.read.peek() {
            Some(_) => Err(self.read.peek_error(ErrorCode::TrailingCharacters)),
            None => Ok(()),
        }
    }

    /// Consume whitespace until the next non-whitespace character.
    fn parse_whitespace(&mut self) {
        while let Some(b' ' | b'\n' | b'\t' | b'\r') = self.read.peek() {
            self.read.discard();
        }
    }

    fn parse_number(&mut self) -> Result<ParserNumber> {
        let literal = tri!(strict::scan(&mut self.read));
        if literal.is_integral() {
            if let Some(number) = integer(&literal) {
                return Ok(number);
            }
        }
        Ok(ParserNumber::F64(strict::evaluate(&literal, &self.precision)))
    }

    fn deserialize_number<V>(&mut self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.parse_whitespace();
        let start = self.read.index();
        let number = tri!(self.parse_number());

        // The de::Error impl creates errors with unknown position. Point them
        // at the first byte of the number.
        number
            .visit(visitor)
            .map_err(|err| err.fix_position(|code| Error::syntax(code, start)))
    }
}

enum ParserNumber {
    F64(f64),
    U64(u64),
    I64(i64),
}

impl ParserNumber {
    fn visit<'de, V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            ParserNumber::F64(x) => visitor.visit_f64(x),
            ParserNumber::U64(x) => visitor.visit_u64(x),
            ParserNumber::I64(x) => visitor.visit_i64(x),
        }
    }
}

/// The exact integer spelled by an integral literal, if one of `u64` or
/// `i64` holds it. Negative zero has no integer representation and stays a
/// float.
fn integer(literal: &DecimalLiteral) -> Option<ParserNumber> {
    let mut significand: u64 = 0;
    for &c in literal.integer {
        significand = add_digit(significand, c)?;
    }

    if !literal.negative {
        Some(ParserNumber::U64(significand))
    } else if significand == 0 {
        Some(ParserNumber::F64(-0.0))
    } else if significand <= i64::MIN.unsigned_abs() {
        Some(ParserNumber::I64((significand as i64).wrapping_neg()))
    } else {
        None
    }
}

impl<'de, 'a> de::Deserializer<'de> for &'a mut Deserializer<'de> {
    type Error = Error;

    #[inline]
    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_number(visitor)
    }

    /// A number is always present, so it is always `Some(...)`.
    #[inline]
    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    /// Parses a newtype struct as the underlying value.
    #[inline]
    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct enum
        identifier ignored_any
    }
}

//////////////////////////////////////////////////////////////////////////////

fn from_trait<'de, T>(mut de: Deserializer<'de>) -> Result<T>
where
    T: de::Deserialize<'de>,
{
    let value = tri!(de::Deserialize::deserialize(&mut de));

    // Make sure the whole input has been consumed.
    tri!(de.end());
    Ok(value)
}

/// Deserialize an instance of type `T` from bytes holding one JSON number.
///
/// Whitespace may surround the number. Nothing else may.
///
/// # Errors
///
/// This conversion can fail if the input is not a JSON number, if anything
/// other than whitespace follows it, or if `T` refuses the number it holds.
/// For example `300` into a `u8`.
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: de::Deserialize<'a>,
{
    from_trait(Deserializer::from_slice(v))
}

/// Deserialize an instance of type `T` from a string holding one JSON number.
///
/// ```
/// use serde::Deserialize;
///
/// #[derive(Deserialize, Debug, PartialEq)]
/// struct Meters(f64);
///
/// let m: Meters = json_strtod::from_str("\t8848.86\n").unwrap();
/// assert_eq!(m, Meters(8848.86));
///
/// let err = json_strtod::from_str::<u8>(" 300").unwrap_err();
/// assert!(err.is_data());
/// assert_eq!(err.column(), 2);
/// ```
///
/// # Errors
///
/// Same as [`from_slice`].
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: de::Deserialize<'a>,
{
    from_trait(Deserializer::from_str(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn integer_of(text: &str) -> Option<ParserNumber> {
        let mut read = SliceRead::new(text.as_bytes());
        let literal = strict::scan(&mut read).unwrap();
        integer(&literal)
    }

    #[test]
    fn integer_boundaries() {
        assert!(matches!(integer_of("0"), Some(ParserNumber::U64(0))));
        assert!(matches!(
            integer_of("18446744073709551615"),
            Some(ParserNumber::U64(u64::MAX))
        ));
        assert!(integer_of("18446744073709551616").is_none());

        assert!(matches!(
            integer_of("-9223372036854775808"),
            Some(ParserNumber::I64(i64::MIN))
        ));
        assert!(integer_of("-9223372036854775809").is_none());

        match integer_of("-0") {
            Some(ParserNumber::F64(x)) => assert!(x == 0.0 && x.is_sign_negative()),
            _ => panic!("expected negative zero"),
        }
    }
}
