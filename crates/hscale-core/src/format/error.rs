//! Errors surfaced by the scale formatter.
//!
//! Only malformed input and arithmetic failures are errors. Every
//! "cannot abbreviate" outcome goes through the fallback instead.

use crate::numeric::ArithmeticError;
use bigdecimal::ParseBigDecimalError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    /// The number to format is not a decimal.
    #[error("invalid number {value:?}: {source}")]
    InvalidNumber {
        value: String,
        #[source]
        source: ParseBigDecimalError,
    },

    /// The minimum threshold is not a decimal.
    #[error("invalid min value {value:?}: {source}")]
    InvalidMinValue {
        value: String,
        #[source]
        source: ParseBigDecimalError,
    },

    /// Dividing the number by the chosen scale failed.
    #[error("division error for number={number:?} scale={label:?}: {source}")]
    Division {
        number: String,
        label: String,
        #[source]
        source: ArithmeticError,
    },

    /// Rounding the quotient (or multiplying it back) failed.
    #[error("rounding error for {value:?} scale={label:?}: {source}")]
    Rounding {
        value: String,
        label: String,
        #[source]
        source: ArithmeticError,
    },
}
