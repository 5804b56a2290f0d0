/// The conversion engine.
///
/// Decides, for any source value and destination kind, whether the value
/// round-trips exactly, and produces either the converted value or a
/// classified error. All decisions are made on the widest intermediate lane
/// of the source's family, which the value reaches without loss.
pub mod engine;
/// The typed face of the engine.
///
/// Defines the sealed `Numeric` trait binding each supported primitive to
/// its kind, so conversions can be written as `convert::<u8, _>(value)` with
/// the destination resolved at compile time.
pub mod numeric;

pub use engine::cast_scalar;
pub use numeric::Numeric;
