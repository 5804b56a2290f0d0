/// Conversion failure type.
///
/// Defines the single error type produced anywhere in the crate, covering
/// both range failures (a well-formed value outside the destination's
/// representable interval) and format failures (text that could not be read
/// as a numeric literal at all).
pub mod cast_error;
/// Failure taxonomy.
///
/// Defines the closed set of reasons a conversion can fail. Every error maps
/// onto exactly one reason, so callers can branch on the class of failure
/// without inspecting message text.
pub mod reason;

pub use cast_error::CastError;
pub use reason::Reason;
