/// Thousands grouping — the default fallback presentation.
///
/// Works on the text of the number so arbitrarily long integers are
/// grouped without parsing. Anything that is not a plain integer
/// (fractions, exponents, stray characters) is returned unchanged.

/// Insert `,` between every group of three integer digits.
///
/// `"1234567"` → `"1,234,567"`, `"-12500"` → `"-12,500"`,
/// `"1000000.1"` → `"1000000.1"` (not an integer, left alone).
pub fn group_thousands(number: &str) -> String {
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return number.to_string();
    }
    if digits.len() <= 3 {
        return number.to_string();
    }

    let mut result = String::with_capacity(number.len() + digits.len() / 3);
    result.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}
