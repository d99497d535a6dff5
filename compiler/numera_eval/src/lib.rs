//! Evaluation of single binary expressions written in Arabic or Roman
//! numerals.
//!
//! The entry point is [`evaluate`]: it parses one line, resolves both
//! operands through the codec of the line's notation, range-checks them,
//! applies the operator and renders the result in the same notation.
//!
//! ```
//! assert_eq!(numera_eval::evaluate("X+V").unwrap(), "XV");
//! assert_eq!(numera_eval::evaluate("-3 * 4").unwrap(), "-12");
//! assert!(numera_eval::evaluate("10/0").is_err());
//! ```

pub mod error;
pub mod evaluator;

pub use error::{ErrorKind, EvalError, Result};
pub use evaluator::{evaluate_expression, evaluate_with, CalculationState};

/// Parses and evaluates one input line.
pub fn evaluate(line: &str) -> Result<String> {
    let expr = numera_parser::parse(line)?;
    evaluate_expression(&expr)
}
