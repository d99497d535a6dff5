//! Roman numeral conversion.
//!
//! Both directions walk [`ROMAN_TABLE`] from the largest symbol down. The
//! table lists the subtractive pairs (`CM`, `XL`, `IV`, ...) as symbols of
//! their own, which is what lets a plain greedy walk produce and read
//! canonical numerals.

use crate::error::{Bounds, NumeralError, Result};

/// Largest value [`to_roman`] will render.
pub const ROMAN_MAX: i64 = 4000;

/// Roman symbols with their values, sorted by descending value.
pub const ROMAN_TABLE: [(&str, i64); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Converts a Roman numeral to its integer value.
///
/// Matching is case-insensitive. The cursor into the table only moves toward
/// smaller symbols, so `IIII` reads as 4 while out-of-order input like `IM`
/// is rejected.
///
/// # Examples
///
/// ```
/// use numera_numeral::to_arabic;
///
/// assert_eq!(to_arabic("MCMXCIV"), Ok(1994));
/// assert_eq!(to_arabic("xiv"), Ok(14));
/// assert!(to_arabic("IM").is_err());
/// ```
pub fn to_arabic(s: &str) -> Result<i64> {
    let upper = s.to_uppercase();
    let mut rest = upper.as_str();
    let mut total: i64 = 0;
    let mut cursor = 0;

    while !rest.is_empty() && cursor < ROMAN_TABLE.len() {
        let (symbol, value) = ROMAN_TABLE[cursor];
        match rest.strip_prefix(symbol) {
            Some(tail) => {
                total = total.saturating_add(value);
                rest = tail;
            }
            None => cursor += 1,
        }
    }

    if !rest.is_empty() {
        log::debug!("roman numeral {s:?} has unmatched suffix {rest:?}");
        return Err(NumeralError::InvalidNumeral(s.to_string()));
    }

    log::trace!("roman {s} -> {total}");
    Ok(total)
}

/// Renders `n` as a canonical Roman numeral.
///
/// Only values in `(0, ROMAN_MAX]` have a representation; anything else is an
/// [`NumeralError::OutOfRange`] error.
///
/// # Examples
///
/// ```
/// use numera_numeral::to_roman;
///
/// assert_eq!(to_roman(15).as_deref(), Ok("XV"));
/// assert!(to_roman(0).is_err());
/// ```
pub fn to_roman(n: i64) -> Result<String> {
    if n <= 0 || n > ROMAN_MAX {
        return Err(NumeralError::out_of_range(n, Bounds::Roman));
    }

    let mut remaining = n;
    let mut out = String::new();
    for (symbol, value) in ROMAN_TABLE {
        while remaining >= value {
            out.push_str(symbol);
            remaining -= value;
        }
    }

    log::trace!("{n} -> roman {out}");
    Ok(out)
}
