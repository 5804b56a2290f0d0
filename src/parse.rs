use crate::{
    convert::numeric::Numeric,
    error::CastError,
    value::{kind::NumericKind, scalar::Scalar},
};

/// Parse configuration.
///
/// Defines `ParseOptions` and the `BaseMode` selection, the immutable
/// per-call configuration of the parser.
pub mod options;

mod lexer;
mod literal;
mod normalize;

pub use options::{BaseMode, ParseOptions};

use literal::ReadOutcome;
use normalize::Literal;

/// Parses text into any numeric kind, rejecting anything that would not
/// round-trip exactly.
///
/// The literal is normalized under `options` (sign, base prefix, digit
/// separators), read into the widest intermediate of its family, and then
/// run through the conversion engine against the destination kind. A
/// trimmed `true`/`false` word form short-circuits to 1/0, which fits every
/// kind.
///
/// Malformed text and out-of-range values never share a reason: the former
/// is a format error quoting the literal, the latter a range error carrying
/// the exceeded boundary.
///
/// # Errors
/// Returns a [`CastError`] when the text is not a valid literal under
/// `options`, or when the value it denotes does not fit the destination.
///
/// # Example
/// ```
/// use numera::{parse, ParseOptions};
///
/// let n: u64 = parse("0x2A", ParseOptions::auto_detect()).unwrap();
/// assert_eq!(n, 42);
///
/// let out_of_range = parse::<i8>("129", ParseOptions::new()).unwrap_err();
/// assert!(out_of_range.is_range_error());
///
/// let garbage = parse::<i8>("abc", ParseOptions::new()).unwrap_err();
/// assert!(garbage.is_format_error());
/// ```
pub fn parse<Out: Numeric>(text: &str, options: ParseOptions) -> Result<Out, CastError> {
    if let Some(flag) = bool_literal(text) {
        return Out::cast_from(Scalar::U8(u8::from(flag)));
    }

    let Some(lit) = normalize::normalize(text, options) else {
        return Err(malformed(text, options, Out::KIND));
    };

    let intermediate = match lit {
        Literal::Integer { negative, digits, radix } => {
            match literal::read_integer(&digits, radix, negative) {
                Some(ReadOutcome::Value(scalar)) => scalar,
                Some(ReadOutcome::TooLarge { approx }) => {
                    // Too large for any integer intermediate: classify
                    // against the destination directly, no round-trip.
                    let value = Scalar::F64(approx);
                    return Err(if approx < 0.0 {
                                   CastError::below(value, Out::KIND)
                               } else {
                                   CastError::above(value, Out::KIND)
                               });
                },
                None => return Err(malformed(text, options, Out::KIND)),
            }
        },
        Literal::Float { text: cleaned } => match cleaned.parse::<f64>() {
            Ok(f) => Scalar::F64(f),
            Err(_) => return Err(malformed(text, options, Out::KIND)),
        },
    };

    if options.reject_fraction_loss && Out::KIND.is_integer() {
        if let Scalar::F64(f) = intermediate {
            if f.is_finite() && f.fract() != 0.0 {
                return Err(CastError::FractionalLoss { value: intermediate,
                                                       target: Out::KIND });
            }
        }
    }

    Out::cast_from(intermediate)
}

/// The boolean fast path: a trimmed `true`/`false` word form reads as 1/0.
///
/// Word forms only. Single-letter forms would collide with hex digits under
/// a hexadecimal base mode, so they are not in the family.
fn bool_literal(text: &str) -> Option<bool> {
    match text.trim() {
        "true" | "True" | "TRUE" => Some(true),
        "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

fn malformed(text: &str, options: ParseOptions, target: NumericKind) -> CastError {
    CastError::MalformedLiteral { literal: text.to_string(),
                                  mode: options.base,
                                  target }
}
