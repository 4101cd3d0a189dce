//! A single magnitude scale: a decimal divisor paired with a display label.
//!
//! Divisors stay as their original text. They are parsed lazily during
//! formatting so that a malformed entry only disqualifies itself, never the
//! whole list.

use crate::numeric::parse_decimal;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Label whose quotient must be integral before it may be used.
///
/// "15.1 thousand" reads as an odd way to write 15,100, so fractional
/// multiples of the thousand scale always go to the fallback instead.
pub const THOUSAND_LABEL: &str = "thousand";

/// An immutable `(divisor, label)` pair, e.g. `("1000000", "million")`.
///
/// Lists of scales are evaluated in the order given; no uniqueness or
/// magnitude ordering is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scale {
    /// Divisor as a decimal string. Expected to be positive.
    value: String,
    /// Label appended after the abbreviated quotient.
    name: String,
}

impl Scale {
    /// Create a scale from a divisor string and a label.
    pub fn new(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: name.into(),
        }
    }

    /// The divisor exactly as supplied.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parse the divisor, or `None` if it is not a valid decimal.
    pub fn divisor(&self) -> Option<BigDecimal> {
        parse_decimal(&self.value).ok()
    }

    /// `true` for the scale that forbids fractional quotients.
    #[inline]
    pub fn is_thousand(&self) -> bool {
        self.name == THOUSAND_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_original_text() {
        let scale = Scale::new("1000000", "million");
        assert_eq!(scale.value(), "1000000");
        assert_eq!(scale.name(), "million");
    }

    #[test]
    fn divisor_parses_plain_and_exponent_forms() {
        assert_eq!(
            Scale::new("1000", "thousand").divisor(),
            Some(BigDecimal::from(1000_i64))
        );
        assert_eq!(
            Scale::new("1E+6", "million").divisor(),
            Some(BigDecimal::from(1_000_000_i64))
        );
    }

    #[test]
    fn divisor_is_none_for_malformed_text() {
        assert_eq!(Scale::new("1,000", "thousand").divisor(), None);
        assert_eq!(Scale::new("", "empty").divisor(), None);
        assert_eq!(Scale::new("lots", "lots").divisor(), None);
        assert_eq!(Scale::new("1_000", "thousand").divisor(), None);
    }

    /// The special case keys on the exact label text, nothing else.
    #[test]
    fn is_thousand_matches_label_exactly() {
        assert!(Scale::new("1000", "thousand").is_thousand());
        assert!(Scale::new("999", "thousand").is_thousand());
        assert!(!Scale::new("1000", "Thousand").is_thousand());
        assert!(!Scale::new("1000", "k").is_thousand());
    }

    #[test]
    fn serde_uses_value_and_name_fields() {
        let json = r#"{"value":"100000","name":"lakh"}"#;
        let scale: Scale = serde_json::from_str(json).unwrap();
        assert_eq!(scale, Scale::new("100000", "lakh"));
        assert_eq!(serde_json::to_string(&scale).unwrap(), json);
    }
}
