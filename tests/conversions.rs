use approx::assert_relative_eq;
use numera::{cast_scalar, convert, convert_or_panic, CastError, NumericKind, Reason, Scalar};

fn boundary_of(err: &CastError) -> Scalar {
    err.boundary().expect("range errors carry a boundary")
}

#[test]
fn widening_always_succeeds() {
    assert_eq!(convert::<i64, i8>(-5).unwrap(), -5);
    assert_eq!(convert::<u32, u8>(200).unwrap(), 200);
    assert_eq!(convert::<i64, u32>(4_000_000_000).unwrap(), 4_000_000_000);
    assert_eq!(convert::<f64, i32>(1234).unwrap(), 1234.0);
    assert_eq!(convert::<f64, f32>(1.5).unwrap(), 1.5);
}

#[test]
fn narrowing_round_trips_in_range_values() {
    let narrowed: u8 = convert(42i64).unwrap();
    assert_eq!(convert::<i64, u8>(narrowed).unwrap(), 42);

    let signed: i8 = convert(255u8 as i64 - 128).unwrap();
    assert_eq!(i64::from(signed), 127);
}

#[test]
fn unsigned_floor_is_exact() {
    let err = convert::<u8, i64>(-1).unwrap_err();
    assert_eq!(err.reason(), Reason::ExceedsMinimum);
    assert_eq!(boundary_of(&err), Scalar::U8(0));

    assert_eq!(convert::<u64, i64>(-1).unwrap_err().reason(),
               Reason::ExceedsMinimum);
    assert_eq!(convert::<usize, i8>(-1).unwrap_err().reason(),
               Reason::ExceedsMinimum);
    assert_eq!(convert::<u8, i64>(0).unwrap(), 0);
}

#[test]
fn unsigned_ceiling_is_exact() {
    let err = convert::<u8, i64>(256).unwrap_err();
    assert_eq!(err.reason(), Reason::ExceedsMaximum);
    assert_eq!(boundary_of(&err), Scalar::U8(255));
    assert_eq!(err.target(), NumericKind::U8);

    assert_eq!(convert::<u8, i64>(255).unwrap(), 255);
    assert_eq!(convert::<u16, i64>(65_536).unwrap_err().reason(),
               Reason::ExceedsMaximum);
    assert_eq!(convert::<u16, i64>(65_535).unwrap(), 65_535);
}

#[test]
fn signed_boundaries_are_exact() {
    assert_eq!(convert::<i8, i64>(127).unwrap(), 127);
    assert_eq!(convert::<i8, i64>(-128).unwrap(), -128);

    let above = convert::<i8, i64>(128).unwrap_err();
    assert_eq!(above.reason(), Reason::ExceedsMaximum);
    assert_eq!(boundary_of(&above), Scalar::I8(127));

    let below = convert::<i8, i64>(-129).unwrap_err();
    assert_eq!(below.reason(), Reason::ExceedsMinimum);
    assert_eq!(boundary_of(&below), Scalar::I8(-128));
}

#[test]
fn cross_signedness_is_checked_both_ways() {
    let err = convert::<i64, u64>(u64::MAX).unwrap_err();
    assert_eq!(err.reason(), Reason::ExceedsMaximum);
    assert_eq!(boundary_of(&err), Scalar::I64(i64::MAX));

    let err = convert::<u64, i64>(i64::MIN).unwrap_err();
    assert_eq!(err.reason(), Reason::ExceedsMinimum);
    assert_eq!(boundary_of(&err), Scalar::U64(0));

    assert_eq!(convert::<i64, u64>(i64::MAX as u64).unwrap(), i64::MAX);
}

#[test]
fn nan_is_unrepresentable_never_a_range_error() {
    let err = convert::<i8, f64>(f64::NAN).unwrap_err();
    assert_eq!(err.reason(), Reason::Unrepresentable);
    assert!(!err.is_range_error());
    assert!(err.boundary().is_none());

    let err = convert::<f64, f32>(f32::NAN).unwrap_err();
    assert_eq!(err.reason(), Reason::Unrepresentable);
}

#[test]
fn infinities_classify_as_range_errors() {
    let above = convert::<f64, f64>(f64::INFINITY).unwrap_err();
    assert_eq!(above.reason(), Reason::ExceedsMaximum);
    assert_eq!(boundary_of(&above), Scalar::F64(f64::MAX));

    let below = convert::<i8, f64>(f64::NEG_INFINITY).unwrap_err();
    assert_eq!(below.reason(), Reason::ExceedsMinimum);
    assert_eq!(boundary_of(&below), Scalar::I8(-128));
}

#[test]
fn fractional_parts_truncate_by_default() {
    assert_eq!(convert::<i8, f64>(3.9).unwrap(), 3);
    assert_eq!(convert::<i8, f64>(-3.9).unwrap(), -3);
    assert_eq!(convert::<u8, f64>(255.9).unwrap(), 255);
    assert_eq!(convert::<u8, f64>(-0.5).unwrap(), 0);
}

#[test]
fn float_to_integer_boundaries_are_exact() {
    assert_eq!(convert::<i8, f64>(127.99).unwrap(), 127);
    assert_eq!(convert::<i8, f64>(-128.9).unwrap(), -128);

    assert_eq!(convert::<i8, f64>(128.0).unwrap_err().reason(),
               Reason::ExceedsMaximum);
    assert_eq!(convert::<i8, f64>(-129.0).unwrap_err().reason(),
               Reason::ExceedsMinimum);
    assert_eq!(convert::<u8, f64>(1e300).unwrap_err().reason(),
               Reason::ExceedsMaximum);
    assert_eq!(convert::<i64, f64>(1e300).unwrap_err().reason(),
               Reason::ExceedsMaximum);
}

#[test]
fn f32_magnitude_boundary_is_inclusive() {
    let err = convert::<f32, f64>(f64::MAX).unwrap_err();
    assert_eq!(err.reason(), Reason::ExceedsMaximum);
    assert_eq!(boundary_of(&err), Scalar::F32(f32::MAX));

    let err = convert::<f32, f64>(-f64::MAX).unwrap_err();
    assert_eq!(err.reason(), Reason::ExceedsMinimum);

    // The largest finite f32 converts to itself, both from f64 and f32.
    assert_eq!(convert::<f32, f64>(f64::from(f32::MAX)).unwrap(), f32::MAX);
    assert_eq!(convert::<f32, f32>(f32::MAX).unwrap(), f32::MAX);
}

#[test]
fn f64_accepts_every_finite_source() {
    let wide: f64 = convert(i64::MAX).unwrap();
    assert_relative_eq!(wide, 9.223_372_036_854_776e18);

    let wide: f64 = convert(u64::MAX).unwrap();
    assert_relative_eq!(wide, 1.844_674_407_370_955_2e19);

    assert_eq!(convert::<f64, f64>(0.1).unwrap(), 0.1);
}

#[test]
fn platform_word_kinds_behave_like_their_width() {
    assert_eq!(convert::<usize, i64>(-1).unwrap_err().reason(),
               Reason::ExceedsMinimum);
    assert_eq!(convert::<usize, u8>(200).unwrap(), 200);
    assert_eq!(convert::<isize, i16>(-300).unwrap(), -300);
    assert_eq!(convert::<i64, isize>(-42).unwrap(), -42);
}

#[test]
fn dynamic_dispatch_matches_the_typed_path() {
    assert_eq!(cast_scalar(Scalar::I64(7), NumericKind::U8).unwrap(),
               Scalar::U8(7));
    assert_eq!(cast_scalar(Scalar::F64(3.9), NumericKind::I8).unwrap(),
               Scalar::I8(3));

    let dynamic = cast_scalar(Scalar::I64(256), NumericKind::U8).unwrap_err();
    let typed = convert::<u8, i64>(256).unwrap_err();
    assert_eq!(dynamic, typed);
}

#[test]
fn boundary_table_is_exact() {
    assert_eq!(NumericKind::U8.min_value(), Scalar::U8(0));
    assert_eq!(NumericKind::U8.max_value(), Scalar::U8(255));
    assert_eq!(NumericKind::I64.min_value(), Scalar::I64(i64::MIN));
    assert_eq!(NumericKind::F32.max_value(), Scalar::F32(f32::MAX));
    assert_eq!(NumericKind::F64.min_value(), Scalar::F64(f64::MIN));

    assert_eq!(NumericKind::I8.width(), 1);
    assert_eq!(NumericKind::U32.width(), 4);
    assert_eq!(NumericKind::F64.width(), 8);
    assert_eq!(NumericKind::Usize.width(), std::mem::size_of::<usize>());

    assert!(NumericKind::I8.is_signed());
    assert!(!NumericKind::U64.is_signed());
    assert!(NumericKind::F32.is_signed());
    assert!(NumericKind::U16.is_integer());
    assert!(NumericKind::F64.is_float());
}

#[test]
fn messages_name_value_boundary_and_kinds() {
    let msg = convert::<u8, i64>(256).unwrap_err().to_string();
    assert!(msg.contains("256"));
    assert!(msg.contains("i64"));
    assert!(msg.contains("255"));
    assert!(msg.contains("u8"));
}

#[test]
fn convert_or_panic_passes_values_through() {
    let x: u16 = convert_or_panic(1000i64);
    assert_eq!(x, 1000);
}

#[test]
#[should_panic(expected = "exceeds the maximum")]
fn convert_or_panic_panics_on_overflow() {
    let _: u8 = convert_or_panic(256i64);
}
