/// Selects how the numeric base of a literal is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BaseMode {
    /// Digits are read in base 10. The default.
    #[default]
    Decimal,
    /// Digits are read in base 2.
    Binary,
    /// Digits are read in base 8.
    Octal,
    /// Digits are read in base 16.
    Hexadecimal,
    /// The base is inferred from the literal itself: `0b`/`0B` binary,
    /// `0o`/`0O` octal, `0x`/`0X` hexadecimal, a bare leading zero followed
    /// by digits legacy octal, anything else decimal. This is also the only
    /// mode that accepts `_` digit-group separators.
    AutoDetect,
}

impl BaseMode {
    /// Returns the radix of a fixed-base mode, or `None` for auto-detection.
    pub(crate) const fn radix(self) -> Option<u32> {
        match self {
            Self::Decimal => Some(10),
            Self::Binary => Some(2),
            Self::Octal => Some(8),
            Self::Hexadecimal => Some(16),
            Self::AutoDetect => None,
        }
    }

    /// The adjective used when quoting a rejected literal.
    pub(crate) const fn literal_name(self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Binary => "binary",
            Self::Octal => "octal",
            Self::Hexadecimal => "hexadecimal",
            Self::AutoDetect => "numeric",
        }
    }
}

impl std::fmt::Display for BaseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AutoDetect => write!(f, "auto-detect"),
            _ => write!(f, "{}", self.literal_name()),
        }
    }
}

/// Immutable configuration for a single parse call.
///
/// Constructed once per call, consumed, discarded. The default reads decimal
/// only and silently truncates a fractional part down to the integer part.
///
/// # Example
/// ```
/// use numera::{parse, BaseMode, ParseOptions};
///
/// let n: u64 = parse("0x2A", ParseOptions::auto_detect()).unwrap();
/// assert_eq!(n, 42);
///
/// let n: u64 = parse("2A", ParseOptions::new().with_base(BaseMode::Hexadecimal)).unwrap();
/// assert_eq!(n, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// How the numeric base is determined.
    pub base: BaseMode,
    /// Whether truncating a fractional part while parsing into an integer
    /// kind is reported as an error instead of silently allowed.
    pub reject_fraction_loss: bool,
}

impl ParseOptions {
    /// Creates the default options: decimal base, fractional truncation
    /// silently allowed.
    #[must_use]
    pub const fn new() -> Self {
        Self { base: BaseMode::Decimal,
               reject_fraction_loss: false }
    }

    /// Creates options with base auto-detection.
    #[must_use]
    pub const fn auto_detect() -> Self {
        Self::new().with_base(BaseMode::AutoDetect)
    }

    /// Replaces the base mode.
    #[must_use]
    pub const fn with_base(mut self, base: BaseMode) -> Self {
        self.base = base;
        self
    }

    /// Makes fractional truncation into an integer kind an error.
    #[must_use]
    pub const fn rejecting_fraction_loss(mut self) -> Self {
        self.reject_fraction_loss = true;
        self
    }
}
