use crate::{
    convert::engine,
    error::CastError,
    value::{kind::NumericKind, scalar::Scalar},
};

mod sealed {
    pub trait Sealed {}
}

/// A primitive numeric type the crate can convert to and from.
///
/// Implemented for every kind in [`NumericKind`] and for nothing else; the
/// trait is sealed, so the set of destinations is closed and the engine
/// never meets a kind it does not know.
pub trait Numeric: Copy + sealed::Sealed {
    /// The kind tag of the implementing type.
    const KIND: NumericKind;

    /// Wraps the value into a kind-tagged [`Scalar`].
    fn to_scalar(self) -> Scalar;

    /// Converts a kind-tagged source into the implementing type, or
    /// classifies the failure.
    ///
    /// # Errors
    /// Returns a [`CastError`] when the source does not round-trip exactly
    /// into the implementing type.
    fn cast_from(source: Scalar) -> Result<Self, CastError>;
}

macro_rules! impl_numeric {
    ($t:ty, $kind:ident, $engine_fn:ident) => {
        impl sealed::Sealed for $t {}

        impl Numeric for $t {
            const KIND: NumericKind = NumericKind::$kind;

            fn to_scalar(self) -> Scalar {
                Scalar::$kind(self)
            }

            fn cast_from(source: Scalar) -> Result<Self, CastError> {
                engine::$engine_fn(source)
            }
        }
    };
}

impl_numeric!(i8, I8, to_i8);
impl_numeric!(i16, I16, to_i16);
impl_numeric!(i32, I32, to_i32);
impl_numeric!(i64, I64, to_i64);
impl_numeric!(isize, Isize, to_isize);
impl_numeric!(u8, U8, to_u8);
impl_numeric!(u16, U16, to_u16);
impl_numeric!(u32, U32, to_u32);
impl_numeric!(u64, U64, to_u64);
impl_numeric!(usize, Usize, to_usize);
impl_numeric!(f32, F32, to_f32);
impl_numeric!(f64, F64, to_f64);
