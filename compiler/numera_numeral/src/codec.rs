//! Notation-agnostic access to operand conversion.

use crate::error::Result;
use crate::{range, roman};

/// Converts operands between their written form and integers.
///
/// The evaluator runs one algorithm for every notation and only swaps the
/// codec it reads operands and writes results with.
pub trait NumeralCodec: Send + Sync {
    /// Short lowercase name used in log output.
    fn name(&self) -> &'static str;

    /// Reads an operand as written in the expression.
    fn to_int(&self, text: &str) -> Result<i64>;

    /// Writes a computed value back out.
    fn from_int(&self, value: i64) -> Result<String>;
}

/// Decimal digits with an optional leading minus sign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArabicCodec;

impl NumeralCodec for ArabicCodec {
    fn name(&self) -> &'static str {
        "arabic"
    }

    fn to_int(&self, text: &str) -> Result<i64> {
        range::parse_arabic(text)
    }

    // Any integer has a decimal form.
    fn from_int(&self, value: i64) -> Result<String> {
        Ok(value.to_string())
    }
}

/// Roman numerals in `(0, 4000]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RomanCodec;

impl NumeralCodec for RomanCodec {
    fn name(&self) -> &'static str {
        "roman"
    }

    fn to_int(&self, text: &str) -> Result<i64> {
        roman::to_arabic(text)
    }

    fn from_int(&self, value: i64) -> Result<String> {
        roman::to_roman(value)
    }
}
