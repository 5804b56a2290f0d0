use crate::{
    error::Reason,
    parse::options::BaseMode,
    value::{kind::NumericKind, scalar::Scalar},
};

/// Represents all ways a conversion or parse can fail.
///
/// Range variants carry the offending value and the exceeded boundary, both
/// tagged with their kinds. The format variant quotes the rejected literal
/// text verbatim together with the base mode that was in effect. No variant
/// is ever produced alongside a value: a conversion either yields the exact
/// value or one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum CastError {
    /// The value lies above the destination kind's maximum.
    AboveMaximum {
        /// The offending value, tagged with its source kind.
        value: Scalar,
        /// The exceeded boundary, tagged with the destination kind.
        boundary: Scalar,
        /// The destination kind.
        target: NumericKind,
    },
    /// The value lies below the destination kind's minimum.
    BelowMinimum {
        /// The offending value, tagged with its source kind.
        value: Scalar,
        /// The undershot boundary, tagged with the destination kind.
        boundary: Scalar,
        /// The destination kind.
        target: NumericKind,
    },
    /// The value has no representation in the destination kind (a NaN
    /// source, for any destination).
    NotRepresentable {
        /// The offending value, tagged with its source kind.
        value: Scalar,
        /// The destination kind.
        target: NumericKind,
    },
    /// A float literal carries a fractional part the destination integer
    /// kind cannot hold, and the caller asked for fractional loss to be
    /// reported instead of truncated.
    FractionalLoss {
        /// The offending value, tagged with its source kind.
        value: Scalar,
        /// The destination kind.
        target: NumericKind,
    },
    /// The input text could not be read as a numeric literal.
    MalformedLiteral {
        /// The rejected literal text, verbatim.
        literal: String,
        /// The base mode that was in effect while reading.
        mode: BaseMode,
        /// The destination kind.
        target: NumericKind,
    },
}

impl CastError {
    /// Returns the reason this error matches.
    ///
    /// # Example
    /// ```
    /// use numera::{convert, Reason};
    ///
    /// let err = convert::<u8, i64>(-1).unwrap_err();
    /// assert_eq!(err.reason(), Reason::ExceedsMinimum);
    ///
    /// let err = convert::<i8, f64>(f64::NAN).unwrap_err();
    /// assert_eq!(err.reason(), Reason::Unrepresentable);
    /// ```
    #[must_use]
    pub const fn reason(&self) -> Reason {
        match self {
            Self::AboveMaximum { .. } => Reason::ExceedsMaximum,
            Self::BelowMinimum { .. } => Reason::ExceedsMinimum,
            Self::NotRepresentable { .. }
            | Self::FractionalLoss { .. }
            | Self::MalformedLiteral { .. } => Reason::Unrepresentable,
        }
    }

    /// Returns `true` if this is a range error, i.e. it carries an exceeded
    /// boundary.
    #[must_use]
    pub const fn is_range_error(&self) -> bool {
        matches!(self, Self::AboveMaximum { .. } | Self::BelowMinimum { .. })
    }

    /// Returns `true` if this is a format error, i.e. it carries rejected
    /// literal text.
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        matches!(self, Self::MalformedLiteral { .. })
    }

    /// Returns the exceeded boundary for range errors.
    ///
    /// # Example
    /// ```
    /// use numera::{convert, Scalar};
    ///
    /// let err = convert::<u8, i64>(256).unwrap_err();
    /// assert_eq!(err.boundary(), Some(Scalar::U8(255)));
    /// ```
    #[must_use]
    pub const fn boundary(&self) -> Option<Scalar> {
        match self {
            Self::AboveMaximum { boundary, .. } | Self::BelowMinimum { boundary, .. } => {
                Some(*boundary)
            },
            _ => None,
        }
    }

    /// Returns the rejected literal text for format errors.
    #[must_use]
    pub fn rejected_literal(&self) -> Option<&str> {
        match self {
            Self::MalformedLiteral { literal, .. } => Some(literal),
            _ => None,
        }
    }

    /// Returns the destination kind the conversion was aimed at.
    #[must_use]
    pub const fn target(&self) -> NumericKind {
        match self {
            Self::AboveMaximum { target, .. }
            | Self::BelowMinimum { target, .. }
            | Self::NotRepresentable { target, .. }
            | Self::FractionalLoss { target, .. }
            | Self::MalformedLiteral { target, .. } => *target,
        }
    }

    /// Builds the range error for a value above `target`'s maximum.
    pub(crate) const fn above(value: Scalar, target: NumericKind) -> Self {
        Self::AboveMaximum { value,
                             boundary: target.max_value(),
                             target }
    }

    /// Builds the range error for a value below `target`'s minimum.
    pub(crate) const fn below(value: Scalar, target: NumericKind) -> Self {
        Self::BelowMinimum { value,
                             boundary: target.min_value(),
                             target }
    }
}

impl std::fmt::Display for CastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AboveMaximum { value, boundary, target } => {
                write!(f,
                       "Cannot convert {value} ({}) to {target}: value exceeds the maximum {boundary} ({target}).",
                       value.kind())
            },
            Self::BelowMinimum { value, boundary, target } => {
                write!(f,
                       "Cannot convert {value} ({}) to {target}: value is below the minimum {boundary} ({target}).",
                       value.kind())
            },
            Self::NotRepresentable { value, target } => {
                write!(f,
                       "Cannot convert {value} ({}) to {target}: value has no representation.",
                       value.kind())
            },
            Self::FractionalLoss { value, target } => {
                write!(f,
                       "Cannot convert {value} ({}) to {target}: the fractional part would be lost.",
                       value.kind())
            },
            Self::MalformedLiteral { literal, mode, target } => {
                write!(f,
                       "Cannot parse '{literal}' as {target}: not a valid {} literal.",
                       mode.literal_name())
            },
        }
    }
}

impl std::error::Error for CastError {}
