use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line matched neither the Arabic nor the Roman grammar.
    #[error("{0} - illegal format of expression")]
    Malformed(String),
}

impl ParseError {
    /// The input line exactly as it was handed to the parser.
    pub fn input(&self) -> &str {
        match self {
            ParseError::Malformed(input) => input,
        }
    }
}
