//! Operand range checks.
//!
//! Every operand is forced into the 16-bit signed interval before it takes
//! part in a calculation. Results are not checked again.

use crate::error::{Bounds, NumeralError, Result};

/// Smallest accepted operand.
pub const OPERAND_MIN: i64 = i16::MIN as i64;
/// Largest accepted operand.
pub const OPERAND_MAX: i64 = i16::MAX as i64;

/// Returns `n` unchanged if it lies within `[OPERAND_MIN, OPERAND_MAX]`.
///
/// # Examples
///
/// ```
/// use numera_numeral::validate;
///
/// assert_eq!(validate(32767), Ok(32767));
/// assert!(validate(32768).is_err());
/// ```
pub fn validate(n: i64) -> Result<i64> {
    if !(OPERAND_MIN..=OPERAND_MAX).contains(&n) {
        log::debug!("operand {n} rejected by range check");
        return Err(NumeralError::out_of_range(n, Bounds::Operand));
    }
    Ok(n)
}

/// Reads a decimal operand literal such as `-42`.
///
/// A literal too large for `i64` is reported as out of operand range, naming
/// the literal as written. The value is not range-checked here; pass it to
/// [`validate`] for that.
pub fn parse_arabic(s: &str) -> Result<i64> {
    s.parse::<i64>().map_err(|_| NumeralError::OutOfRange {
        value: s.to_string(),
        bounds: Bounds::Operand,
    })
}
