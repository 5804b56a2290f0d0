use crate::{
    error::CastError,
    value::{
        kind::NumericKind,
        scalar::{Scalar, Wide},
    },
};

/// Picks the boundary reason from the sign of the source.
const fn range(value: Scalar, below: bool, target: NumericKind) -> CastError {
    if below {
        CastError::below(value, target)
    } else {
        CastError::above(value, target)
    }
}

/// Validates a float source against an integer destination's interval.
///
/// `lower` and `upper` delimit `[MIN, MAX + 1)` of the destination; both are
/// powers of two (or zero) and therefore exact in `f64` for every integer
/// kind up to 64 bits, so the comparison itself never rounds. The fractional
/// part is truncated toward zero before the test; dropping it is not an
/// error here.
fn checked_trunc(source: Scalar,
                 f: f64,
                 lower: f64,
                 upper: f64,
                 target: NumericKind)
                 -> Result<f64, CastError> {
    if f.is_nan() {
        return Err(CastError::NotRepresentable { value: source, target });
    }

    let truncated = f.trunc();
    if truncated < lower {
        return Err(range(source, true, target));
    }
    if truncated >= upper {
        return Err(range(source, false, target));
    }
    Ok(truncated)
}

macro_rules! int_engine {
    ($fn_name:ident, $t:ty, $kind:ident) => {
        #[allow(clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                clippy::cast_precision_loss)]
        pub(crate) fn $fn_name(source: Scalar) -> Result<$t, CastError> {
            match source.widen() {
                Wide::Int(i) => {
                    <$t>::try_from(i).map_err(|_| range(source, i < 0, NumericKind::$kind))
                },
                Wide::Uint(u) => {
                    <$t>::try_from(u).map_err(|_| range(source, false, NumericKind::$kind))
                },
                Wide::Float(f) => {
                    const LOWER: f64 = <$t>::MIN as f64;
                    const UPPER: f64 = <$t>::MAX as f64 + 1.0;
                    checked_trunc(source, f, LOWER, UPPER, NumericKind::$kind).map(|t| t as $t)
                },
            }
        }
    };
}

int_engine!(to_i8, i8, I8);
int_engine!(to_i16, i16, I16);
int_engine!(to_i32, i32, I32);
int_engine!(to_i64, i64, I64);
int_engine!(to_isize, isize, Isize);
int_engine!(to_u8, u8, U8);
int_engine!(to_u16, u16, U16);
int_engine!(to_u32, u32, U32);
int_engine!(to_u64, u64, U64);
int_engine!(to_usize, usize, Usize);

/// Converts any source to `f32`.
///
/// The boundary test is the approximate-magnitude rule through an `f64`
/// intermediate, inclusive of the largest finite `f32`: anything whose
/// magnitude exceeds it is rejected, so infinities classify as range errors
/// and `f32::MAX` converts to itself. Precision loss within range is
/// accepted, matching the `f64` destination policy.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn to_f32(source: Scalar) -> Result<f32, CastError> {
    let f = source.widen().as_f64();
    if f.is_nan() {
        return Err(CastError::NotRepresentable { value: source,
                                                 target: NumericKind::F32 });
    }
    if f > f64::from(f32::MAX) {
        return Err(range(source, false, NumericKind::F32));
    }
    if f < -f64::from(f32::MAX) {
        return Err(range(source, true, NumericKind::F32));
    }
    Ok(f as f32)
}

/// Converts any source to `f64`.
///
/// The widest destination: every finite source fits, so only the non-finite
/// float sources are rejected, NaN as unrepresentable and infinities as
/// range errors against the largest finite `f64`.
pub(crate) fn to_f64(source: Scalar) -> Result<f64, CastError> {
    let f = source.widen().as_f64();
    if f.is_nan() {
        return Err(CastError::NotRepresentable { value: source,
                                                 target: NumericKind::F64 });
    }
    if f.is_infinite() {
        return Err(range(source, f < 0.0, NumericKind::F64));
    }
    Ok(f)
}

/// Converts a kind-tagged value to the destination kind, or classifies the
/// failure.
///
/// This is the runtime-dispatch boundary: callers that only learn kinds at
/// runtime resolve them here, before the engine proper. The typed
/// [`convert`](crate::convert()) front end goes through the same per-kind
/// paths.
///
/// # Errors
/// Returns a [`CastError`] when the value does not round-trip exactly into
/// the destination kind.
///
/// # Example
/// ```
/// use numera::{cast_scalar, NumericKind, Scalar};
///
/// let out = cast_scalar(Scalar::I64(7), NumericKind::U8).unwrap();
/// assert_eq!(out, Scalar::U8(7));
///
/// assert!(cast_scalar(Scalar::I64(-7), NumericKind::U8).is_err());
/// ```
pub fn cast_scalar(value: Scalar, dest: NumericKind) -> Result<Scalar, CastError> {
    match dest {
        NumericKind::I8 => to_i8(value).map(Scalar::I8),
        NumericKind::I16 => to_i16(value).map(Scalar::I16),
        NumericKind::I32 => to_i32(value).map(Scalar::I32),
        NumericKind::I64 => to_i64(value).map(Scalar::I64),
        NumericKind::Isize => to_isize(value).map(Scalar::Isize),
        NumericKind::U8 => to_u8(value).map(Scalar::U8),
        NumericKind::U16 => to_u16(value).map(Scalar::U16),
        NumericKind::U32 => to_u32(value).map(Scalar::U32),
        NumericKind::U64 => to_u64(value).map(Scalar::U64),
        NumericKind::Usize => to_usize(value).map(Scalar::Usize),
        NumericKind::F32 => to_f32(value).map(Scalar::F32),
        NumericKind::F64 => to_f64(value).map(Scalar::F64),
    }
}
