/// Scale formatter — turns round numbers into "1.23 million" style text.
///
/// The decision runs in four stages:
/// 1. **Cheap reject:** numbers with two or fewer trailing zeros go
///    straight to the fallback without being parsed.
/// 2. **Threshold:** numbers below the minimum go to the fallback.
/// 3. **Scale choice:** the first scale (in list order) whose divisor does
///    not exceed the number is the only one considered.
/// 4. **Round trip:** the quotient is rounded to three decimals and
///    multiplied back; any mismatch means the fallback is used.
pub mod error;

pub use error::FormatError;

use crate::model::{presets, Scale};
use crate::numeric::{
    count_trailing_zeros, parse_decimal, round_to_3_decimals, strip_trailing_zeros,
    ArithmeticError, WorkingContext,
};
use bigdecimal::BigDecimal;
use tracing::debug;

/// Numbers with at most this many trailing zeros are never abbreviated.
const MAX_REJECTED_TRAILING_ZEROS: usize = 2;

/// Presentation used whenever a number is not abbreviated.
///
/// Receives the original number string untouched. Any `Fn(&str) -> String`
/// is a fallback, including [`crate::grouping::group_thousands`].
pub trait Fallback {
    fn fallback(&self, number: &str) -> String;
}

impl<F> Fallback for F
where
    F: Fn(&str) -> String,
{
    fn fallback(&self, number: &str) -> String {
        self(number)
    }
}

/// Abbreviate `number` using the first applicable entry of `scales`.
///
/// Returns the fallback's output whenever abbreviation does not apply or
/// would lose precision. Errors are reserved for malformed `number` / `min`
/// strings and arithmetic failures in the working context.
///
/// The quotient is always written out positionally, never with an
/// exponent. Exponent-form input such as `"1E+99000"` that abbreviates
/// cleanly therefore produces output whose length grows with the exponent
/// (about 99,000 digits for a `1000` divisor).
pub fn format_scaled<F: Fallback>(
    number: &str,
    min: &str,
    scales: &[Scale],
    fallback: F,
) -> Result<String, FormatError> {
    if count_trailing_zeros(number) <= MAX_REJECTED_TRAILING_ZEROS {
        debug!(number, "too few trailing zeros, using fallback");
        return Ok(fallback.fallback(number));
    }

    let value = parse_decimal(number).map_err(|source| FormatError::InvalidNumber {
        value: number.to_owned(),
        source,
    })?;
    let min_value = parse_decimal(min).map_err(|source| FormatError::InvalidMinValue {
        value: min.to_owned(),
        source,
    })?;

    if value < min_value {
        debug!(number, min, "below minimum, using fallback");
        return Ok(fallback.fallback(number));
    }

    let ctx = WorkingContext::default();

    for scale in scales {
        let Some(divisor) = scale.divisor() else {
            debug!(
                label = scale.name(),
                divisor = scale.value(),
                "skipping scale with unparsable divisor"
            );
            continue;
        };
        if divisor > value {
            continue;
        }

        debug!(number, label = scale.name(), "trying scale");
        return match abbreviate(number, &value, scale, &divisor, &ctx)? {
            Some(text) => Ok(text),
            None => Ok(fallback.fallback(number)),
        };
    }

    debug!(number, "no scale applies, using fallback");
    Ok(fallback.fallback(number))
}

/// Evaluate a single scale. `None` means the number must fall back.
fn abbreviate(
    number: &str,
    value: &BigDecimal,
    scale: &Scale,
    divisor: &BigDecimal,
    ctx: &WorkingContext,
) -> Result<Option<String>, FormatError> {
    let ratio = ctx
        .quo(value, divisor)
        .map_err(|source| FormatError::Division {
            number: number.to_owned(),
            label: scale.name().to_owned(),
            source,
        })?;

    if scale.is_thousand() {
        let whole = ctx
            .floor(&ratio)
            .map_err(|source| rounding_error(&ratio, scale, source))?;
        if ratio != whole {
            debug!(number, %ratio, "fractional thousand, using fallback");
            return Ok(None);
        }
    }

    let rounded =
        round_to_3_decimals(&ratio, ctx).map_err(|source| rounding_error(&ratio, scale, source))?;

    let reconstructed = ctx
        .mul(&rounded, divisor)
        .map_err(|source| rounding_error(&rounded, scale, source))?;
    if &reconstructed != value {
        debug!(number, %rounded, label = scale.name(), "round trip mismatch, using fallback");
        return Ok(None);
    }

    let rendered = rounded.to_plain_string();
    Ok(Some(format!(
        "{} {}",
        strip_trailing_zeros(&rendered),
        scale.name()
    )))
}

fn rounding_error(value: &BigDecimal, scale: &Scale, source: ArithmeticError) -> FormatError {
    FormatError::Rounding {
        value: value.to_string(),
        label: scale.name().to_owned(),
        source,
    }
}

/// A reusable `(min, scales)` pair for formatting many numbers the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    min: String,
    scales: Vec<Scale>,
}

impl Default for Formatter {
    /// Western scales with the default minimum.
    fn default() -> Self {
        Self::new(presets::DEFAULT_MIN, presets::western())
    }
}

impl Formatter {
    pub fn new(min: impl Into<String>, scales: Vec<Scale>) -> Self {
        Self {
            min: min.into(),
            scales,
        }
    }

    pub fn min(&self) -> &str {
        &self.min
    }

    pub fn scales(&self) -> &[Scale] {
        &self.scales
    }

    /// Format one number; see [`format_scaled`].
    pub fn format<F: Fallback>(&self, number: &str, fallback: F) -> Result<String, FormatError> {
        format_scaled(number, &self.min, &self.scales, fallback)
    }
}
