/// Numeric kind descriptors.
///
/// Defines the `NumericKind` enum, the closed set of numeric representations
/// the crate converts between, together with the boundary table: every kind
/// knows its minimum and maximum representable value and its machine width.
pub mod kind;
/// Kind-tagged scalar values.
///
/// Defines the `Scalar` enum, a closed tagged union holding one value of any
/// supported numeric kind. `Scalar` is the runtime counterpart of the typed
/// API: callers that only learn the kind of a value at runtime build a
/// `Scalar` and hand it to the conversion engine.
pub mod scalar;

pub use kind::NumericKind;
pub use scalar::Scalar;
