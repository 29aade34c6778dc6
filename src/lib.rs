//! # json_strtod
//!
//! Fast kernels that turn the decimal ASCII spelling of a real number into an
//! IEEE-754 `f64`.
//!
//! Two grammars are supported:
//!
//! - **Free-form**, in the style of a classic C `strtod`: leading whitespace,
//!   an optional sign, digits with at most one decimal point, and an optional
//!   exponent. This parser never fails. Input that holds no number consumes
//!   nothing and yields `0.0`.
//!
//! - **Strict JSON**: exactly the `number` production of RFC 8259 and nothing
//!   else. Anything outside the grammar is reported as an [`Error`].
//!
//! ```
//! # fn main() -> json_strtod::Result<()> {
//! let (value, len) = json_strtod::parse_lenient(" 3.14abc");
//! assert_eq!((value, len), (3.14, 5));
//!
//! let (value, len) = json_strtod::parse_strict_json_number("-12.5e2,")?;
//! assert_eq!((value, len), (-1250.0, 7));
//!
//! assert!(json_strtod::parse_strict_json_number("01").is_err());
//! # Ok(())
//! # }
//! ```
//!
//! # Precision
//!
//! The kernels keep at most 18 significant digits and scale with precomputed
//! powers of ten, so results are within a few units in the last place of the
//! correctly rounded value rather than always exact. In exchange every parse
//! is a single bounded pass with no allocation.
//!
//! The strict parser offers two ways to fold digits, selected through the
//! [`Accumulate`] trait:
//!
//! - [`Truncate`] ignores everything past the 18th significant digit.
//! - [`Renormalize`] additionally pulls a positive exponent back into the
//!   mantissa and strips trailing decimal zeros before scaling.
//!
//! [`Precision`] picks one of the two at run time. Its default is `Truncate`,
//! or `Retain` when the crate is built with the `retain_mantissa` feature.
//!
//! ```
//! use json_strtod::{parse_strict_json_number_with, Renormalize, Truncate};
//!
//! let truncated = parse_strict_json_number_with("2.5e-3", &Truncate).unwrap();
//! let retained = parse_strict_json_number_with("2.5e-3", &Renormalize).unwrap();
//! assert_eq!(truncated, retained);
//! ```
//!
//! # Serde
//!
//! A single JSON number can be deserialized into any type whose `Deserialize`
//! impl accepts numbers:
//!
//! ```
//! let x: f64 = json_strtod::from_str(" 6.02214076e23 ").unwrap();
//! assert_eq!(x, 6.02214076e23);
//!
//! let n: u32 = json_strtod::from_str("42").unwrap();
//! assert_eq!(n, 42);
//! ```

#![doc(html_root_url = "https://docs.rs/json_strtod/0.1.0")]
// Ignored clippy lints
#![allow(
    clippy::comparison_chain,
    clippy::excessive_precision,
    clippy::unreadable_literal,
)]
// Ignored clippy_pedantic lints
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
)]
#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

extern crate serde_core as serde;

// We only use our own error type; no need for From conversions provided by the
// standard library's try! macro. This reduces lines of LLVM IR by 4%.
macro_rules! tri {
    ($e:expr $(,)?) => {
        match $e {
            core::result::Result::Ok(val) => val,
            core::result::Result::Err(err) => return core::result::Result::Err(err),
        }
    };
}

pub mod de;
pub mod error;
mod lenient;
mod lexical;
mod literal;
mod read;
mod strict;

#[doc(inline)]
pub use crate::de::{from_slice, from_str, Deserializer};
#[doc(inline)]
pub use crate::error::{Error, Result};
pub use crate::lenient::{parse_lenient, parse_lenient_checked, LenientNumber};
pub use crate::lexical::{Accumulate, Mantissa, Precision, Renormalize, Truncate, DIGIT_BUDGET};
pub use crate::literal::DecimalLiteral;
pub use crate::strict::{parse_strict_json_number, parse_strict_json_number_with, MAX_LITERAL_LEN};
