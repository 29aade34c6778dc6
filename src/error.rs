//! When parsing a number goes wrong.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::fmt::{self, Debug, Display};
use core::result;
use serde::de;

/// This type represents all possible errors that can occur when parsing a
/// strict JSON number or deserializing a value from one.
///
/// The free-form parser never fails and so never produces this type.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible. A
    /// larger `Error` type was substantially slower due to all the functions
    /// that pass around `Result<T, Error>`.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `json_strtod::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// One-based column at which the error was detected.
    ///
    /// The first byte of the input is in column 1. Column 0 means the error
    /// carries no position, which happens for errors created through
    /// `serde::de::Error::custom` outside of a parse.
    pub fn column(&self) -> usize {
        self.err.column
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Syntax` - input that is not a syntactically valid JSON
    ///   number, or trailing input after one
    /// - `Category::Data` - a well-formed number that the target type refused
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::Message(_) => Category::Data,
            ErrorCode::ExpectedNumber
            | ErrorCode::LeadingZero
            | ErrorCode::ExpectedFractionDigit
            | ErrorCode::ExpectedExponentDigit
            | ErrorCode::NumberTooLong
            | ErrorCode::TrailingCharacters => Category::Syntax,
        }
    }

    /// Returns true if this error was caused by input that was not a
    /// syntactically valid JSON number.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by input data that was
    /// semantically incorrect.
    ///
    /// For example, `1.5` is semantically incorrect when the type being
    /// deserialized into is a `u8`.
    pub fn is_data(&self) -> bool {
        self.classify() == Category::Data
    }
}

/// Categorizes the cause of a `json_strtod::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by input that was not a valid JSON number.
    Syntax,

    /// The error was caused by input data that was semantically incorrect.
    Data,
}

struct ErrorImpl {
    code: ErrorCode,
    column: usize,
}

/// This type describes all possible errors that can occur when parsing a
/// strict JSON number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    /// Catchall for messages produced by a `Deserialize` impl.
    Message(Box<str>),

    /// Expected a digit, or `-` followed by a digit, to start the number.
    ExpectedNumber,

    /// A digit directly follows a leading `0`.
    LeadingZero,

    /// Expected at least one digit after the decimal point.
    ExpectedFractionDigit,

    /// Expected at least one digit after `e`, `E` and the optional sign.
    ExpectedExponentDigit,

    /// The number spans more than `MAX_LITERAL_LEN` bytes.
    NumberTooLong,

    /// Non-whitespace input follows the number.
    TrailingCharacters,
}

impl Error {
    /// Error at zero-based byte `offset` of the input.
    #[cold]
    pub(crate) fn syntax(code: ErrorCode, offset: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code,
                column: offset + 1,
            }),
        }
    }

    #[cold]
    pub(crate) fn fix_position<F>(self, f: F) -> Self
    where
        F: FnOnce(ErrorCode) -> Error,
    {
        if self.err.column == 0 {
            f(self.err.code)
        } else {
            self
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::Message(msg) => f.write_str(msg),
            ErrorCode::ExpectedNumber => f.write_str("expected number"),
            ErrorCode::LeadingZero => f.write_str("invalid number: leading zero"),
            ErrorCode::ExpectedFractionDigit => f.write_str("expected digit after `.`"),
            ErrorCode::ExpectedExponentDigit => f.write_str("expected digit in exponent"),
            ErrorCode::NumberTooLong => f.write_str("number too long"),
            ErrorCode::TrailingCharacters => f.write_str("trailing characters"),
        }
    }
}

impl de::StdError for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.column == 0 {
            Display::fmt(&self.code, f)
        } else {
            write!(f, "{} at column {}", self.code, self.column)
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, column: {})",
            self.err.code.to_string(),
            self.err.column
        )
    }
}

impl de::Error for Error {
    #[cold]
    fn custom<T: Display>(msg: T) -> Error {
        make_error(msg.to_string())
    }
}

fn make_error(msg: String) -> Error {
    Error {
        err: Box::new(ErrorImpl {
            code: ErrorCode::Message(msg.into_boxed_str()),
            column: 0,
        }),
    }
}
