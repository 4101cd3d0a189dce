/// Numeric helpers — strict parsing, fixed-precision decimal arithmetic and
/// text utilities.
///
/// All arithmetic goes through [`WorkingContext`] so that every
/// intermediate value is rounded the same way. Binary floating point is
/// never used: the round-trip equality check depends on exact decimals.
pub mod context;
pub mod parse;
pub mod text;

pub use context::{
    round_to_3_decimals, ArithmeticError, WorkingContext, MAX_EXPONENT, MIN_EXPONENT,
    WORKING_PRECISION,
};
pub use parse::parse_decimal;
pub use text::{count_trailing_zeros, strip_trailing_zeros};
