use crate::parse::{
    lexer::{self, Shape},
    options::ParseOptions,
};

/// A literal reduced to sign, digits, and base, ready for reading.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Literal {
    /// An integer span with separators and any base prefix removed.
    Integer {
        negative: bool,
        digits: String,
        radix: u32,
    },
    /// A float span with separators removed, sign included, in the form
    /// `f64::from_str` reads.
    Float { text: String },
}

/// Normalizes raw text into a [`Literal`] under the given options.
///
/// Returns `None` for anything malformed: surrounding whitespace (never
/// trimmed on this path), a leading `+` on an integer literal, a digit
/// separator outside auto-detection or in the wrong position, a base prefix
/// in a fixed-base mode, a fractional literal in a non-decimal base, or a
/// bare sign or decimal point.
pub(crate) fn normalize(text: &str, options: ParseOptions) -> Option<Literal> {
    let (sign, body) = split_sign(text);
    if body.is_empty() {
        return None;
    }

    match options.base.radix() {
        None => auto_detect(sign, body),
        Some(radix) => fixed_base(sign, body, radix),
    }
}

/// Auto-detection: the lexer's shape is the base.
fn auto_detect(sign: Option<char>, body: &str) -> Option<Literal> {
    let shape = lexer::classify(body)?;

    let (radix, digits) = match shape {
        Shape::Float => return float_literal(sign, body),
        Shape::Binary => (2, &body[2..]),
        Shape::Octal => (8, &body[2..]),
        Shape::Hexadecimal => (16, &body[2..]),
        Shape::LegacyOctal => (8, &body[1..]),
        Shape::Decimal => (10, body),
    };

    // Only `-` may sign an integer literal.
    if sign == Some('+') {
        return None;
    }
    Some(Literal::Integer { negative: sign == Some('-'),
                            digits: strip_separators(digits),
                            radix })
}

/// Fixed base: digits are read directly in the selected base, with no
/// prefix stripping and no separators. A prefix letter that is not a digit
/// of the base is therefore malformed, exactly as an explicit different-base
/// prefix must be.
fn fixed_base(sign: Option<char>, body: &str, radix: u32) -> Option<Literal> {
    if radix == 10 && body.contains(['.', 'e', 'E']) {
        return decimal_float(sign, body);
    }
    if body.contains('.') {
        return None;
    }
    if sign == Some('+') {
        return None;
    }
    if !body.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    Some(Literal::Integer { negative: sign == Some('-'),
                            digits: body.to_string(),
                            radix })
}

/// A fractional literal in decimal mode: same float shapes as
/// auto-detection, minus the separators.
fn decimal_float(sign: Option<char>, body: &str) -> Option<Literal> {
    if body.contains('_') {
        return None;
    }
    if lexer::classify(body)? != Shape::Float {
        return None;
    }
    float_literal(sign, body)
}

/// Rebuilds the cleaned float text, sign included. A leading `+` is
/// accepted here: the literal is ultimately read as a float.
fn float_literal(sign: Option<char>, body: &str) -> Option<Literal> {
    let mut text = String::with_capacity(body.len() + 1);
    if let Some(c) = sign {
        text.push(c);
    }
    text.extend(body.chars().filter(|&c| c != '_'));
    Some(Literal::Float { text })
}

fn split_sign(text: &str) -> (Option<char>, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (Some('-'), &text[1..]),
        Some(b'+') => (Some('+'), &text[1..]),
        _ => (None, text),
    }
}

fn strip_separators(digits: &str) -> String {
    digits.chars().filter(|&c| c != '_').collect()
}

#[cfg(test)]
mod tests {
    use super::{normalize, Literal, ParseOptions};
    use crate::parse::options::BaseMode;

    fn integer(negative: bool, digits: &str, radix: u32) -> Option<Literal> {
        Some(Literal::Integer { negative,
                                digits: digits.to_string(),
                                radix })
    }

    #[test]
    fn auto_detect_resolves_prefixes() {
        let auto = ParseOptions::auto_detect();
        assert_eq!(normalize("0x2A", auto), integer(false, "2A", 16));
        assert_eq!(normalize("0b1010", auto), integer(false, "1010", 2));
        assert_eq!(normalize("0o52", auto), integer(false, "52", 8));
        assert_eq!(normalize("052", auto), integer(false, "52", 8));
        assert_eq!(normalize("-0x2A", auto), integer(true, "2A", 16));
        assert_eq!(normalize("1_000", auto), integer(false, "1000", 10));
    }

    #[test]
    fn fixed_base_reads_digits_directly() {
        let hex = ParseOptions::new().with_base(BaseMode::Hexadecimal);
        assert_eq!(normalize("2A", hex), integer(false, "2A", 16));
        // `b` is an ordinary hex digit; the "prefix" is just digits here.
        assert_eq!(normalize("0b101", hex), integer(false, "0b101", 16));

        let bin = ParseOptions::new().with_base(BaseMode::Binary);
        assert_eq!(normalize("0x2A", bin), None);
        assert_eq!(normalize("1_0", bin), None);

        // Legacy octal is an auto-detect convention, not a decimal one.
        assert_eq!(normalize("052", ParseOptions::new()), integer(false, "052", 10));
    }

    #[test]
    fn signs_follow_the_float_rule() {
        let auto = ParseOptions::auto_detect();
        assert_eq!(normalize("+42", auto), None);
        assert_eq!(normalize("+42", ParseOptions::new()), None);
        assert!(matches!(normalize("+4.2", auto), Some(Literal::Float { .. })));
        assert!(matches!(normalize("-4.2", ParseOptions::new()),
                         Some(Literal::Float { .. })));
        assert_eq!(normalize("-", auto), None);
        assert_eq!(normalize(".", auto), None);
    }

    #[test]
    fn fractional_literals_need_a_decimal_base() {
        let oct = ParseOptions::new().with_base(BaseMode::Octal);
        assert_eq!(normalize("1.5", oct), None);
        assert!(matches!(normalize("1.5", ParseOptions::new()),
                         Some(Literal::Float { .. })));
        // In fixed hex, `e` stays a digit.
        let hex = ParseOptions::new().with_base(BaseMode::Hexadecimal);
        assert_eq!(normalize("1e5", hex), integer(false, "1e5", 16));
    }

    #[test]
    fn whitespace_is_never_trimmed_here() {
        assert_eq!(normalize(" 42", ParseOptions::new()), None);
        assert_eq!(normalize("42 ", ParseOptions::auto_detect()), None);
        assert_eq!(normalize("4 2", ParseOptions::new()), None);
    }
}
