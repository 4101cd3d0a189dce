//! Ready-made scale lists.
//!
//! Both lists run from the largest divisor to the smallest, so the first
//! applicable scale is also the largest one.

use super::scale::Scale;

/// Minimum value below which numbers are never abbreviated.
pub const DEFAULT_MIN: &str = "10000";

/// Short-scale western naming: billion, million, thousand.
pub fn western() -> Vec<Scale> {
    vec![
        Scale::new("1000000000", "billion"),
        Scale::new("1000000", "million"),
        Scale::new("1000", "thousand"),
    ]
}

/// Western names interleaved with Indian numbering (crore = 10^7, lakh = 10^5).
pub fn indian() -> Vec<Scale> {
    vec![
        Scale::new("1000000000", "billion"),
        Scale::new("10000000", "crore"),
        Scale::new("1000000", "million"),
        Scale::new("100000", "lakh"),
        Scale::new("1000", "thousand"),
    ]
}
