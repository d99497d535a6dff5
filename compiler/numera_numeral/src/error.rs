//! Errors raised while converting or checking numerals.

use std::fmt;

/// A result type for numeral operations.
pub type Result<T> = std::result::Result<T, NumeralError>;

/// The interval a value was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    /// Closed 16-bit signed interval applied to every operand.
    Operand,
    /// Half-open interval of values that have a Roman representation.
    Roman,
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bounds::Operand => write!(f, "[{},{}]", crate::OPERAND_MIN, crate::OPERAND_MAX),
            Bounds::Roman => write!(f, "(0,{}]", crate::ROMAN_MAX),
        }
    }
}

/// An error produced by the numeral codecs or the range checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    /// The text still had characters left after the Roman table was exhausted.
    #[error("{0} cannot be converted to a Roman Numeral")]
    InvalidNumeral(String),

    /// A value fell outside the interval required at this stage.
    ///
    /// `value` is kept as text so literals too large for any integer type
    /// can still be reported verbatim.
    #[error("{value} is not in range {bounds}")]
    OutOfRange {
        /// The offending value as written or computed.
        value: String,
        /// The interval that was violated.
        bounds: Bounds,
    },
}

impl NumeralError {
    /// Creates an out-of-range error for a computed value.
    pub fn out_of_range(value: i64, bounds: Bounds) -> Self {
        NumeralError::OutOfRange {
            value: value.to_string(),
            bounds,
        }
    }
}
