use crate::value::scalar::Scalar;

/// Identifies one fixed-width numeric representation.
///
/// The set is closed: signed and unsigned integers of 8, 16, 32 and 64 bits
/// plus the platform word width, and the two IEEE-754 float widths. Every
/// kind carries a fixed byte width, a signedness, and fixed minimum and
/// maximum representable values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `isize`
    Isize,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `usize`
    Usize,
    /// `f32`
    F32,
    /// `f64`
    F64,
}

impl NumericKind {
    /// Returns the Rust type name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }

    /// Returns the smallest representable value of the kind, tagged with the
    /// kind itself.
    ///
    /// The minimum of an unsigned kind is always zero; the minimum of a float
    /// kind is the negation of its largest finite magnitude, never negative
    /// infinity.
    ///
    /// # Example
    /// ```
    /// use numera::{NumericKind, Scalar};
    ///
    /// assert_eq!(NumericKind::U8.min_value(), Scalar::U8(0));
    /// assert_eq!(NumericKind::I8.min_value(), Scalar::I8(-128));
    /// assert_eq!(NumericKind::F32.min_value(), Scalar::F32(f32::MIN));
    /// ```
    #[must_use]
    pub const fn min_value(self) -> Scalar {
        match self {
            Self::I8 => Scalar::I8(i8::MIN),
            Self::I16 => Scalar::I16(i16::MIN),
            Self::I32 => Scalar::I32(i32::MIN),
            Self::I64 => Scalar::I64(i64::MIN),
            Self::Isize => Scalar::Isize(isize::MIN),
            Self::U8 => Scalar::U8(0),
            Self::U16 => Scalar::U16(0),
            Self::U32 => Scalar::U32(0),
            Self::U64 => Scalar::U64(0),
            Self::Usize => Scalar::Usize(0),
            Self::F32 => Scalar::F32(f32::MIN),
            Self::F64 => Scalar::F64(f64::MIN),
        }
    }

    /// Returns the largest representable value of the kind, tagged with the
    /// kind itself.
    ///
    /// For float kinds this is the largest *finite* value, not infinity.
    ///
    /// # Example
    /// ```
    /// use numera::{NumericKind, Scalar};
    ///
    /// assert_eq!(NumericKind::U8.max_value(), Scalar::U8(255));
    /// assert_eq!(NumericKind::F64.max_value(), Scalar::F64(f64::MAX));
    /// ```
    #[must_use]
    pub const fn max_value(self) -> Scalar {
        match self {
            Self::I8 => Scalar::I8(i8::MAX),
            Self::I16 => Scalar::I16(i16::MAX),
            Self::I32 => Scalar::I32(i32::MAX),
            Self::I64 => Scalar::I64(i64::MAX),
            Self::Isize => Scalar::Isize(isize::MAX),
            Self::U8 => Scalar::U8(u8::MAX),
            Self::U16 => Scalar::U16(u16::MAX),
            Self::U32 => Scalar::U32(u32::MAX),
            Self::U64 => Scalar::U64(u64::MAX),
            Self::Usize => Scalar::Usize(usize::MAX),
            Self::F32 => Scalar::F32(f32::MAX),
            Self::F64 => Scalar::F64(f64::MAX),
        }
    }

    /// Returns the width of the kind in bytes.
    ///
    /// # Example
    /// ```
    /// use numera::NumericKind;
    ///
    /// assert_eq!(NumericKind::I16.width(), 2);
    /// assert_eq!(NumericKind::F64.width(), 8);
    /// assert_eq!(NumericKind::Usize.width(), std::mem::size_of::<usize>());
    /// ```
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::I8 | Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 | Self::F32 => 4,
            Self::I64 | Self::U64 | Self::F64 => 8,
            Self::Isize | Self::Usize => std::mem::size_of::<usize>(),
        }
    }

    /// Returns `true` if the kind can represent negative values.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        !matches!(self,
                  Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::Usize)
    }

    /// Returns `true` if the kind is a fixed-width integer.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        !self.is_float()
    }

    /// Returns `true` if the kind is a floating-point representation.
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }
}

impl std::fmt::Display for NumericKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
