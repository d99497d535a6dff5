// Expression parser for numera using nom
// A line is tried against the Arabic grammar first, then the Roman one

pub mod grammar;

use nom::branch::alt;
use numera_ast::Expression;

use crate::error::{ParseError, Result};

pub use grammar::{arabic_expression, roman_expression};

/// Parses one input line into an [`Expression`].
///
/// The whole line must match one grammar; nothing is trimmed beforehand.
pub fn parse(line: &str) -> Result<Expression> {
    match alt((arabic_expression, roman_expression))(line) {
        Ok((_, expr)) => {
            log::debug!("parsed {line:?} as {} expression {expr}", expr.notation());
            Ok(expr)
        }
        Err(err) => {
            log::debug!("no grammar matched {line:?}: {err:?}");
            Err(ParseError::Malformed(line.to_string()))
        }
    }
}
