//! Working-precision decimal context.
//!
//! `BigDecimal` arithmetic is exact (or 100 digits for division), which is
//! more than the formatter wants: every intermediate value is rounded by a
//! `bigdecimal::Context` to a fixed number of significant digits, and
//! results whose exponent leaves a fixed range are rejected. Those
//! rejections are the only way the formatter's arithmetic can fail.

use bigdecimal::{BigDecimal, Context, RoundingMode, Zero};
use std::num::NonZeroU64;
use thiserror::Error;

/// Significant decimal digits kept by every formatter operation.
pub const WORKING_PRECISION: u64 = 17;

/// Largest adjusted exponent a result may have.
pub const MAX_EXPONENT: i64 = 100_000;

/// Smallest adjusted exponent a non-zero result may have.
pub const MIN_EXPONENT: i64 = -100_000;

/// Failure of a single arithmetic step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("exponent overflow: adjusted exponent {exponent} exceeds {limit}")]
    Overflow { exponent: i64, limit: i64 },
    #[error("exponent underflow: adjusted exponent {exponent} is below {limit}")]
    Underflow { exponent: i64, limit: i64 },
}

/// Rounding and range rules applied to every arithmetic result.
#[derive(Debug, Clone)]
pub struct WorkingContext {
    rounding: Context,
    max_exponent: i64,
    min_exponent: i64,
}

impl Default for WorkingContext {
    fn default() -> Self {
        Self::with_precision(WORKING_PRECISION)
    }
}

impl WorkingContext {
    /// A context keeping `precision` significant digits (at least one).
    pub fn with_precision(precision: u64) -> Self {
        let precision = NonZeroU64::new(precision).unwrap_or(NonZeroU64::MIN);
        Self {
            rounding: Context::new(precision, RoundingMode::HalfUp),
            max_exponent: MAX_EXPONENT,
            min_exponent: MIN_EXPONENT,
        }
    }

    pub fn precision(&self) -> u64 {
        self.rounding.precision().get()
    }

    /// `lhs / rhs`, rounded half-up to the working precision.
    pub fn quo(&self, lhs: &BigDecimal, rhs: &BigDecimal) -> Result<BigDecimal, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        self.finish(lhs / rhs)
    }

    /// `lhs * rhs`, rounded half-up to the working precision.
    pub fn mul(&self, lhs: &BigDecimal, rhs: &BigDecimal) -> Result<BigDecimal, ArithmeticError> {
        self.finish(lhs * rhs)
    }

    /// Largest integer not greater than `value`.
    pub fn floor(&self, value: &BigDecimal) -> Result<BigDecimal, ArithmeticError> {
        self.finish(to_integral(value, RoundingMode::Floor))
    }

    /// Nearest integer to `value`, ties away from zero.
    pub fn round_to_integral(&self, value: &BigDecimal) -> Result<BigDecimal, ArithmeticError> {
        self.finish(to_integral(value, RoundingMode::HalfUp))
    }

    fn finish(&self, value: BigDecimal) -> Result<BigDecimal, ArithmeticError> {
        let value = self.rounding.round_decimal(value);
        if value.is_zero() {
            return Ok(value);
        }
        let exponent = adjusted_exponent(&value);
        if exponent > self.max_exponent {
            Err(ArithmeticError::Overflow {
                exponent,
                limit: self.max_exponent,
            })
        } else if exponent < self.min_exponent {
            Err(ArithmeticError::Underflow {
                exponent,
                limit: self.min_exponent,
            })
        } else {
            Ok(value)
        }
    }
}

/// Multiply by 1000, round to the nearest integer, divide by 1000.
///
/// Every step runs in `ctx`, so the result is exactly the value whose
/// product with a divisor is later compared against the input.
pub fn round_to_3_decimals(
    value: &BigDecimal,
    ctx: &WorkingContext,
) -> Result<BigDecimal, ArithmeticError> {
    let thousand = BigDecimal::from(1000_i64);
    let scaled = ctx.mul(value, &thousand)?;
    let whole = ctx.round_to_integral(&scaled)?;
    ctx.quo(&whole, &thousand)
}

/// Position of the most significant digit, i.e. `floor(log10(|value|))`.
fn adjusted_exponent(value: &BigDecimal) -> i64 {
    let (_, scale) = value.as_bigint_and_exponent();
    value.digits() as i64 - 1 - scale
}

fn to_integral(value: &BigDecimal, mode: RoundingMode) -> BigDecimal {
    let (_, scale) = value.as_bigint_and_exponent();
    // Non-positive scale is already integral; rescaling would only pad zeros.
    if scale <= 0 {
        value.clone()
    } else {
        value.with_scale_round(0, mode)
    }
}
