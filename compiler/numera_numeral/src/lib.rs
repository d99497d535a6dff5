//! Numeral handling for the numera calculator
//!
//! This crate converts operands between their textual form and integers.
//! It provides the Roman numeral codec, the operand range checks, and the
//! [`NumeralCodec`] trait the evaluator uses to stay notation-agnostic.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod codec;
pub mod error;
pub mod range;
pub mod roman;

// Re-export the main types for convenience
pub use codec::{ArabicCodec, NumeralCodec, RomanCodec};
pub use error::{Bounds, NumeralError, Result};
pub use range::{parse_arabic, validate, OPERAND_MAX, OPERAND_MIN};
pub use roman::{to_arabic, to_roman, ROMAN_MAX, ROMAN_TABLE};
