//! # numera
//!
//! numera is a safe numeric conversion and parsing library written in Rust.
//! It converts values between every fixed-width numeric kind and parses
//! textual literals into them, guaranteeing that no information is silently
//! lost: anything that would overflow, underflow, or fail to read is
//! rejected with a classified error instead of wrapping or truncating.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Cross-kind conversion.
///
/// This module decides, for any pair of numeric kinds, whether a value
/// round-trips exactly, and either produces the converted value or a
/// classified rejection. It holds the per-destination checked casts and the
/// sealed trait that ties each primitive type to its kind.
///
/// # Responsibilities
/// - Widens every source losslessly into its family's widest lane.
/// - Checks destination boundaries exactly, including the float-to-integer
///   interval tests.
/// - Classifies every rejection by the sign of the source.
pub mod convert;
/// Provides the unified error type for conversion and parsing.
///
/// This module defines the one error produced anywhere in the crate and the
/// closed taxonomy of reasons behind it. Errors carry the offending value
/// and the exceeded boundary (both kind-tagged) or the rejected literal
/// text, so callers can branch on the class of failure without ever
/// matching on message strings.
///
/// # Responsibilities
/// - Defines `CastError` and the three-way `Reason` taxonomy.
/// - Distinguishes range errors from format errors structurally.
/// - Renders the human-readable message naming value, kinds, and boundary.
pub mod error;
/// String-to-number parsing.
///
/// This module turns textual literals into numeric values: it resolves
/// signs, base prefixes, and digit separators according to the caller's
/// options, reads the digits exactly, and hands the result to the
/// conversion engine for the same boundary checks every conversion gets.
///
/// # Responsibilities
/// - Normalizes literal text (sign, base detection, separators).
/// - Reads integer spans with checked arithmetic and float spans exactly.
/// - Keeps malformed-literal failures apart from out-of-range ones.
pub mod parse;
/// Numeric kinds and kind-tagged values.
///
/// This module defines the closed set of numeric representations the crate
/// works with, the boundary table for each, and the tagged union used to
/// carry a value of any kind through the engine and into errors.
///
/// # Responsibilities
/// - Defines `NumericKind` with min/max/width per kind.
/// - Defines `Scalar`, the closed union over all kinds.
pub mod value;

pub use crate::{
    convert::{cast_scalar, Numeric},
    error::{CastError, Reason},
    parse::{parse, BaseMode, ParseOptions},
    value::{NumericKind, Scalar},
};

/// Converts a value into any other numeric kind, rejecting anything that
/// would not round-trip exactly.
///
/// Fractional parts of float sources are truncated toward zero and are not,
/// by themselves, an error; everything else that loses information is.
///
/// # Errors
/// Returns a [`CastError`] when the value lies outside the destination
/// kind's representable interval, or is NaN.
///
/// # Example
/// ```
/// use numera::{convert, Reason};
///
/// let narrowed: u8 = convert(200i64).unwrap();
/// assert_eq!(narrowed, 200);
///
/// // Truncation of the fractional part is allowed by default.
/// let truncated: i8 = convert(3.9f64).unwrap();
/// assert_eq!(truncated, 3);
///
/// let err = convert::<u8, i64>(256).unwrap_err();
/// assert_eq!(err.reason(), Reason::ExceedsMaximum);
/// ```
pub fn convert<Out: Numeric, In: Numeric>(value: In) -> Result<Out, CastError> {
    Out::cast_from(value.to_scalar())
}

/// Like [`convert`](convert()), but panics with the classified message on
/// failure.
///
/// This is the must-succeed variant: a thin wrapper, nothing more. Inside a
/// `#[test]` the tracked panic fails the test at the caller's line.
///
/// # Panics
/// Panics when the conversion would lose information.
///
/// # Example
/// ```
/// use numera::convert_or_panic;
///
/// let x: u16 = convert_or_panic(1000i64);
/// assert_eq!(x, 1000);
/// ```
#[track_caller]
pub fn convert_or_panic<Out: Numeric, In: Numeric>(value: In) -> Out {
    match convert(value) {
        Ok(out) => out,
        Err(e) => panic!("{e}"),
    }
}

/// Like [`parse`](parse()), but panics with the classified message on
/// failure.
///
/// # Panics
/// Panics when the text is malformed or the value does not fit.
///
/// # Example
/// ```
/// use numera::{parse_or_panic, ParseOptions};
///
/// let n: u64 = parse_or_panic("052", ParseOptions::auto_detect());
/// assert_eq!(n, 42);
/// ```
#[track_caller]
pub fn parse_or_panic<Out: Numeric>(text: &str, options: ParseOptions) -> Out {
    match parse(text, options) {
        Ok(out) => out,
        Err(e) => panic!("{e}"),
    }
}
