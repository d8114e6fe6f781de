//! Value coercion for stored flag values

/// Interpret a stored flag value as a boolean
///
/// Only the literal `"0"` is false. A flag given without a value stores the
/// empty string, which reads as true.
#[must_use]
#[inline]
pub fn interpret_bool(value: &str) -> bool {
    value != "0"
}

/// Render a boolean the way flags store it
#[must_use]
#[inline]
pub const fn bool_value(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Interpret a stored flag value as an integer
///
/// Strict-prefix parse: leading ASCII whitespace is skipped, one optional
/// sign is accepted, then digits are consumed up to the first non-digit.
/// Anything that does not start with a digit yields `0`. Out-of-range values
/// saturate.
#[must_use]
pub fn interpret_int(value: &str) -> i64 {
    let trimmed = value.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut result: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        result = if negative {
            result.saturating_mul(10).saturating_sub(digit)
        } else {
            result.saturating_mul(10).saturating_add(digit)
        };
    }
    result
}
