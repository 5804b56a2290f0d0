use logos::Logos;

/// The shapes an unsigned literal body can take under base auto-detection.
///
/// The regex alternatives are the base detection: a prefix selects its base,
/// a bare leading zero followed by octal digits is legacy octal, and any
/// body containing a decimal point or an exponent is a float regardless of
/// how its digits start. Digit-group separators are baked into the shapes:
/// a single `_` between digit groups matches, while a leading, trailing, or
/// doubled separator has no shape at all.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Shape {
    /// `0b1010`, `0B10_10`
    #[regex(r"0[bB][01]+(_[01]+)*")]
    Binary,
    /// `0o52`, `0O5_2`
    #[regex(r"0[oO][0-7]+(_[0-7]+)*")]
    Octal,
    /// `0x2A`, `0Xff_ff`
    #[regex(r"0[xX][0-9a-fA-F]+(_[0-9a-fA-F]+)*")]
    Hexadecimal,
    /// `052`, `0_52`: a leading zero with no letter prefix.
    #[regex(r"0(_?[0-7]+)+")]
    LegacyOctal,
    /// `0`, `42`, `1_000`
    #[regex(r"0|[1-9][0-9]*(_[0-9]+)*")]
    Decimal,
    /// `3.9`, `.5`, `1e5`, `2.5E-3`, `1_000.25`
    #[regex(r"[0-9]+(_[0-9]+)*\.[0-9]+(_[0-9]+)*([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+(_[0-9]+)*([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+(_[0-9]+)*[eE][+-]?[0-9]+")]
    Float,
}

/// Classifies a literal body, requiring a single shape to span all of it.
///
/// Anything that leaves a remainder (trailing garbage, embedded whitespace,
/// a separator in the wrong place) is malformed and classifies as `None`.
pub(crate) fn classify(body: &str) -> Option<Shape> {
    let mut lexer = Shape::lexer(body);
    let shape = lexer.next()?.ok()?;

    if lexer.span().end != body.len() {
        return None;
    }
    Some(shape)
}

#[cfg(test)]
mod tests {
    use super::{classify, Shape};

    #[test]
    fn prefixes_select_their_base() {
        assert_eq!(classify("0b1010"), Some(Shape::Binary));
        assert_eq!(classify("0o52"), Some(Shape::Octal));
        assert_eq!(classify("0x2A"), Some(Shape::Hexadecimal));
        assert_eq!(classify("0X2a"), Some(Shape::Hexadecimal));
        assert_eq!(classify("052"), Some(Shape::LegacyOctal));
        assert_eq!(classify("42"), Some(Shape::Decimal));
        assert_eq!(classify("0"), Some(Shape::Decimal));
    }

    #[test]
    fn floats_win_over_integer_shapes() {
        assert_eq!(classify("3.9"), Some(Shape::Float));
        assert_eq!(classify(".5"), Some(Shape::Float));
        assert_eq!(classify("1e5"), Some(Shape::Float));
        assert_eq!(classify("052.5"), Some(Shape::Float));
        assert_eq!(classify("2.5E-3"), Some(Shape::Float));
    }

    #[test]
    fn separators_only_between_digit_groups() {
        assert_eq!(classify("1_000"), Some(Shape::Decimal));
        assert_eq!(classify("0xff_ff"), Some(Shape::Hexadecimal));
        assert_eq!(classify("0_52"), Some(Shape::LegacyOctal));
        assert_eq!(classify("1_0.2_5"), Some(Shape::Float));

        assert_eq!(classify("_1"), None);
        assert_eq!(classify("1_"), None);
        assert_eq!(classify("1__0"), None);
        assert_eq!(classify("0x_ff"), None);
    }

    #[test]
    fn malformed_bodies_have_no_shape() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("."), None);
        assert_eq!(classify("abc"), None);
        assert_eq!(classify("08"), None);
        assert_eq!(classify("0b12"), None);
        assert_eq!(classify("1."), None);
        assert_eq!(classify(" 42"), None);
        assert_eq!(classify("42 "), None);
        assert_eq!(classify("4 2"), None);
    }
}
