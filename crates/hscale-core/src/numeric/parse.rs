//! Strict decimal parsing.
//!
//! `BigDecimal::from_str` is lenient: it accepts `_` between digits, so
//! `"10_000_000"` would parse as ten million. Input is checked against the
//! plain decimal grammar first:
//!
//! ```text
//! [+|-] ( digits [ "." [digits] ] | "." digits ) [ (e|E) [+|-] digits ]
//! ```

use bigdecimal::{BigDecimal, ParseBigDecimalError};
use std::str::FromStr;

/// Parse `s` as a decimal, rejecting anything outside the plain grammar.
pub fn parse_decimal(s: &str) -> Result<BigDecimal, ParseBigDecimalError> {
    if s.is_empty() {
        return Err(ParseBigDecimalError::Empty);
    }
    if !is_plain_decimal(s) {
        return Err(ParseBigDecimalError::Other(format!(
            "{s:?} is not a plain decimal number"
        )));
    }
    BigDecimal::from_str(s)
}

fn is_plain_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
        None => (unsigned, None),
    };

    let (whole, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let mantissa_ok =
        (!whole.is_empty() || !frac.is_empty()) && all_digits(whole) && all_digits(frac);

    let exponent_ok = match exponent {
        None => true,
        Some(exp) => {
            let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !digits.is_empty() && all_digits(digits)
        }
    };

    mantissa_ok && exponent_ok
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
