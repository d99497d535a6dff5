use numera_numeral::NumeralError;
use numera_parser::ParseError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EvalError>;

/// Everything that can stop an evaluation.
///
/// Parse and numeral failures are passed through with their own messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Numeral(#[from] NumeralError),

    #[error("/ by zero")]
    DivisionByZero,
}

/// Coarse category of an [`EvalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Malformed,
    InvalidNumeral,
    OutOfRange,
    DivisionByZero,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Malformed => "malformed_expression",
            ErrorKind::InvalidNumeral => "invalid_numeral",
            ErrorKind::OutOfRange => "out_of_range",
            ErrorKind::DivisionByZero => "division_by_zero",
        }
    }
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::Parse(ParseError::Malformed(_)) => ErrorKind::Malformed,
            EvalError::Numeral(NumeralError::InvalidNumeral(_)) => ErrorKind::InvalidNumeral,
            EvalError::Numeral(NumeralError::OutOfRange { .. }) => ErrorKind::OutOfRange,
            EvalError::DivisionByZero => ErrorKind::DivisionByZero,
        }
    }
}
