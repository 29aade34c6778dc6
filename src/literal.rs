/// The pieces of a decimal number, delimited by one of the lexers.
///
/// A literal borrows its digit runs from the input and lives only as long as
/// one parse call. It is the input of an [`Accumulate`] strategy, which is why
/// its fields are public: a custom strategy, or a test, can build one by hand.
///
/// For `-0012.3400e-5` scanned by the free-form grammar the fields are:
///
/// | field      | value       |
/// |------------|-------------|
/// | `negative` | `true`      |
/// | `integer`  | `b"0012"`   |
/// | `fraction` | `b"3400"`   |
/// | `exponent` | `-5`        |
/// | `end`      | `13`        |
///
/// [`Accumulate`]: crate::Accumulate
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DecimalLiteral<'a> {
    /// Whether the literal was preceded by `-`.
    pub negative: bool,
    /// Digits before the decimal point, without sign. May be empty in the
    /// free-form grammar.
    pub integer: &'a [u8],
    /// Digits after the decimal point. Empty if there is no decimal point.
    pub fraction: &'a [u8],
    /// Value of the exponent suffix, 0 if there is none. The strict lexer
    /// stops folding digits once the magnitude reaches 2,000,000; the
    /// free-form lexer saturates at `i32::MAX`.
    pub exponent: i32,
    /// Offset one past the last byte of the literal.
    pub end: usize,
}

impl<'a> DecimalLiteral<'a> {
    /// True if the literal has neither a fraction nor a nonzero exponent.
    pub fn is_integral(&self) -> bool {
        self.fraction.is_empty() && self.exponent == 0
    }
}
