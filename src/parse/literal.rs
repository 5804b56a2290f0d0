use crate::value::scalar::Scalar;

/// The result of reading a digit span into the widest integer intermediate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ReadOutcome {
    /// The span fit: an `i64` when negative, a `u64` otherwise.
    Value(Scalar),
    /// The magnitude exceeds every integer intermediate. `approx` is the
    /// sign-applied approximate magnitude, kept only for error reporting.
    TooLarge { approx: f64 },
}

/// Accumulates a pre-validated digit span into an exact integer value.
///
/// Digits are accumulated into a `u64` magnitude with checked arithmetic;
/// the approximate float magnitude is tracked alongside so an overflowing
/// span can still be named in an error. Returns `None` only if a non-digit
/// slips through, which normalization prevents.
#[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
pub(crate) fn read_integer(digits: &str, radix: u32, negative: bool) -> Option<ReadOutcome> {
    let mut magnitude: u64 = 0;
    let mut approx = 0.0_f64;
    let mut overflow = false;

    for c in digits.chars() {
        let digit = u64::from(c.to_digit(radix)?);
        approx = approx.mul_add(f64::from(radix), digit as f64);

        if !overflow {
            match magnitude.checked_mul(u64::from(radix))
                           .and_then(|m| m.checked_add(digit))
            {
                Some(next) => magnitude = next,
                None => overflow = true,
            }
        }
    }

    let signed_approx = if negative { -approx } else { approx };
    if overflow {
        return Some(ReadOutcome::TooLarge { approx: signed_approx });
    }

    if negative {
        // The most negative i64 has no positive counterpart; one past
        // i64::MAX is exactly it.
        const MIN_MAGNITUDE: u64 = i64::MAX as u64 + 1;
        if magnitude < MIN_MAGNITUDE {
            Some(ReadOutcome::Value(Scalar::I64(-(magnitude as i64))))
        } else if magnitude == MIN_MAGNITUDE {
            Some(ReadOutcome::Value(Scalar::I64(i64::MIN)))
        } else {
            Some(ReadOutcome::TooLarge { approx: signed_approx })
        }
    } else {
        Some(ReadOutcome::Value(Scalar::U64(magnitude)))
    }
}

#[cfg(test)]
mod tests {
    use super::{read_integer, ReadOutcome, Scalar};

    #[test]
    fn spans_accumulate_in_their_radix() {
        assert_eq!(read_integer("2A", 16, false),
                   Some(ReadOutcome::Value(Scalar::U64(42))));
        assert_eq!(read_integer("52", 8, false),
                   Some(ReadOutcome::Value(Scalar::U64(42))));
        assert_eq!(read_integer("101", 2, false),
                   Some(ReadOutcome::Value(Scalar::U64(5))));
        assert_eq!(read_integer("0", 10, false),
                   Some(ReadOutcome::Value(Scalar::U64(0))));
    }

    #[test]
    fn negative_spans_become_i64() {
        assert_eq!(read_integer("42", 10, true),
                   Some(ReadOutcome::Value(Scalar::I64(-42))));
        assert_eq!(read_integer("9223372036854775808", 10, true),
                   Some(ReadOutcome::Value(Scalar::I64(i64::MIN))));
        assert!(matches!(read_integer("9223372036854775809", 10, true),
                         Some(ReadOutcome::TooLarge { .. })));
    }

    #[test]
    fn u64_is_the_unsigned_ceiling() {
        assert_eq!(read_integer("18446744073709551615", 10, false),
                   Some(ReadOutcome::Value(Scalar::U64(u64::MAX))));
        assert!(matches!(read_integer("18446744073709551616", 10, false),
                         Some(ReadOutcome::TooLarge { .. })));
    }
}
