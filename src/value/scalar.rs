use crate::value::kind::NumericKind;

/// A single numeric value tagged with its kind.
///
/// This enum models every value the crate can convert: one variant per
/// supported numeric kind. It is the runtime entry point for callers that
/// resolve kinds dynamically, and the representation used inside errors for
/// offending values and exceeded boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    /// An `i8` value.
    I8(i8),
    /// An `i16` value.
    I16(i16),
    /// An `i32` value.
    I32(i32),
    /// An `i64` value.
    I64(i64),
    /// An `isize` value.
    Isize(isize),
    /// A `u8` value.
    U8(u8),
    /// A `u16` value.
    U16(u16),
    /// A `u32` value.
    U32(u32),
    /// A `u64` value.
    U64(u64),
    /// A `usize` value.
    Usize(usize),
    /// An `f32` value.
    F32(f32),
    /// An `f64` value.
    F64(f64),
}

macro_rules! scalar_from {
    ($t:ty, $variant:ident) => {
        impl From<$t> for Scalar {
            fn from(v: $t) -> Self {
                Self::$variant(v)
            }
        }
    };
}

scalar_from!(i8, I8);
scalar_from!(i16, I16);
scalar_from!(i32, I32);
scalar_from!(i64, I64);
scalar_from!(isize, Isize);
scalar_from!(u8, U8);
scalar_from!(u16, U16);
scalar_from!(u32, U32);
scalar_from!(u64, U64);
scalar_from!(usize, Usize);
scalar_from!(f32, F32);
scalar_from!(f64, F64);

impl Scalar {
    /// Returns the kind of the held value.
    ///
    /// # Example
    /// ```
    /// use numera::{NumericKind, Scalar};
    ///
    /// assert_eq!(Scalar::from(42i32).kind(), NumericKind::I32);
    /// assert_eq!(Scalar::F64(1.5).kind(), NumericKind::F64);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> NumericKind {
        match self {
            Self::I8(_) => NumericKind::I8,
            Self::I16(_) => NumericKind::I16,
            Self::I32(_) => NumericKind::I32,
            Self::I64(_) => NumericKind::I64,
            Self::Isize(_) => NumericKind::Isize,
            Self::U8(_) => NumericKind::U8,
            Self::U16(_) => NumericKind::U16,
            Self::U32(_) => NumericKind::U32,
            Self::U64(_) => NumericKind::U64,
            Self::Usize(_) => NumericKind::Usize,
            Self::F32(_) => NumericKind::F32,
            Self::F64(_) => NumericKind::F64,
        }
    }

    /// Returns `true` if the held value is [`an integer kind`](NumericKind::is_integer).
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.kind().is_integer()
    }

    /// Returns `true` if the held value is [`a float kind`](NumericKind::is_float).
    #[must_use]
    pub const fn is_float(&self) -> bool {
        self.kind().is_float()
    }

    /// Widens the value into the widest intermediate lane of its family.
    ///
    /// Every supported kind fits one of the three lanes without loss: signed
    /// integers widen to `i64`, unsigned integers to `u64`, floats to `f64`.
    #[allow(clippy::cast_possible_wrap, clippy::cast_lossless)]
    pub(crate) fn widen(self) -> Wide {
        match self {
            Self::I8(v) => Wide::Int(i64::from(v)),
            Self::I16(v) => Wide::Int(i64::from(v)),
            Self::I32(v) => Wide::Int(i64::from(v)),
            Self::I64(v) => Wide::Int(v),
            Self::Isize(v) => Wide::Int(v as i64),
            Self::U8(v) => Wide::Uint(u64::from(v)),
            Self::U16(v) => Wide::Uint(u64::from(v)),
            Self::U32(v) => Wide::Uint(u64::from(v)),
            Self::U64(v) => Wide::Uint(v),
            Self::Usize(v) => Wide::Uint(v as u64),
            Self::F32(v) => Wide::Float(f64::from(v)),
            Self::F64(v) => Wide::Float(v),
        }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::Isize(v) => write!(f, "{v}"),
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::Usize(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
        }
    }
}

/// The widest intermediate representation used by the engine and the parser.
///
/// Each lane is exact for its family; a value keeps its identity through
/// widening, so range decisions made on the lane hold for the original.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Wide {
    Int(i64),
    Uint(u64),
    Float(f64),
}

impl Wide {
    /// Collapses the lane to `f64` for float destinations. Integer precision
    /// loss is accepted here; float destinations do not round-trip.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Uint(u) => u as f64,
            Self::Float(f) => f,
        }
    }
}
