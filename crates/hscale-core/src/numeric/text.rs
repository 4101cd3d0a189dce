//! Textual helpers operating on decimal strings rather than their values.

/// Number of trailing `'0'` characters in `s`.
///
/// Purely textual: `"100"` → 2, `"1E+5"` → 0, `"0"` → 1, `"10.0"` → 2.
pub fn count_trailing_zeros(s: &str) -> usize {
    s.bytes().rev().take_while(|&b| b == b'0').count()
}

/// Drop trailing fractional zeros, then a dangling decimal point.
///
/// Strings without a `'.'` are returned unchanged, so integer zeros survive.
pub fn strip_trailing_zeros(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0');
    trimmed.strip_suffix('.').unwrap_or(trimmed)
}
