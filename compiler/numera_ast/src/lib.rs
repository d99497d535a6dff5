//! Expression model for the numera calculator.
//!
//! A parsed line is an [`Expression`]: two operands kept exactly as written,
//! one [`Operator`], and the [`Notation`] the operands are written in.

pub mod ast;

// Re-export commonly used types
pub use ast::{Expression, Notation, Operator, UnknownOperator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A result type for serialisation helpers.
#[cfg(feature = "serde")]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Serializes an expression (or any part of one) to a JSON string.
///
/// # Example
///
/// ```
/// use numera_ast::{to_json, Expression, Notation, Operator};
///
/// let expr = Expression::new("X", Operator::Add, "V", Notation::Roman);
/// let json = to_json(&expr).unwrap();
///
/// assert!(json.contains(r#""operator": "Add""#));
/// assert!(json.contains(r#""notation": "Roman""#));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes an expression from a JSON string.
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}
