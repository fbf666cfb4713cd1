//! Conversion between `f64` values and display strings
//!
//! The display shows values exactly as a browser's default number-to-string
//! conversion would: shortest round-trip digits, plain notation for decimal
//! exponents in `(-6, 21]`, exponential notation with an explicit exponent
//! sign otherwise, and the literals `Infinity`, `-Infinity` and `NaN`.
//! No rounding is ever applied, so `0.1 + 0.2` shows `0.30000000000000004`.
//!
//! Parsing is prefix based: the longest leading numeric literal is used and
//! anything after it is ignored. A string with no numeric prefix is `NaN`.

/// Largest decimal exponent that is still written in plain notation
const MAX_PLAIN_EXPONENT: i32 = 21;

/// Smallest (exclusive) decimal exponent written in plain notation
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Format a value the way the display shows it
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers negative zero as well
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, point) = shortest_digits(value.abs());
    format!("{}{}", sign, layout_digits(&digits, point))
}

/// Shortest round-trip digits of a positive finite value.
///
/// Returns the digit string `d1..dk` and the exponent `n` such that the value
/// equals `0.d1..dk * 10^n`.
fn shortest_digits(value: f64) -> (String, i32) {
    // `{:e}` yields the shortest representation, e.g. "1.2345e3" or "5e-7"
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    (digits, exponent + 1)
}

fn layout_digits(digits: &str, point: i32) -> String {
    let k = digits.len() as i32;

    if k <= point && point <= MAX_PLAIN_EXPONENT {
        // Integer: pad with trailing zeros
        let mut out = digits.to_string();
        out.extend(std::iter::repeat('0').take((point - k) as usize));
        out
    } else if 0 < point && point <= MAX_PLAIN_EXPONENT {
        let (int_part, frac_part) = digits.split_at(point as usize);
        format!("{}.{}", int_part, frac_part)
    } else if MIN_PLAIN_EXPONENT < point && point <= 0 {
        let zeros = "0".repeat((-point) as usize);
        format!("0.{}{}", zeros, digits)
    } else {
        let exponent = point - 1;
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, exp_sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, exp_sign, exponent.abs())
        }
    }
}

/// Parse the longest numeric prefix of `text`.
///
/// Accepts an optional sign followed by either `Infinity` or a literal of the
/// form `digits[.digits][e[+-]digits]` where at least one mantissa digit is
/// present. Returns `NaN` when no such prefix exists.
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let magnitude = if rest.starts_with("Infinity") {
        f64::INFINITY
    } else {
        match numeric_prefix(rest) {
            Some(literal) => literal.parse::<f64>().unwrap_or(f64::NAN),
            None => f64::NAN,
        }
    };

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Extract a normalized numeric literal from the front of `text`.
///
/// The returned literal always has digits on both sides of a decimal point
/// (if any), so it is accepted by `str::parse::<f64>`.
fn numeric_prefix(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut pos = 0;

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_part = &text[int_start..pos];

    let mut frac_part = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_part = &text[frac_start..end];
        pos = end;
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut literal = String::with_capacity(pos + 8);
    literal.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        literal.push('.');
        literal.push_str(frac_part);
    }

    // Exponent only counts when at least one exponent digit follows
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut end = pos + 1;
        let mut exp_sign = "";
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            exp_sign = &text[end..end + 1];
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            literal.push('e');
            literal.push_str(exp_sign);
            literal.push_str(&text[digits_start..end]);
        }
    }

    Some(literal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(81.0), "81");
        assert_eq!(format_number(-120.0), "-120");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e300), "1.5e+300");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(12.25), "12.25");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-1.5e-7), "-1.5e-7");
        assert_eq!(format_number(std::f64::consts::PI), "3.141592653589793");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_parse_plain_literals() {
        assert_eq!(parse_number("0"), 0.0);
        assert_eq!(parse_number("0."), 0.0);
        assert_eq!(parse_number("12.5"), 12.5);
        assert_eq!(parse_number("-3"), -3.0);
        assert_eq!(parse_number(".25"), 0.25);
        assert_eq!(parse_number("1e+21"), 1e21);
        assert_eq!(parse_number("1.5e-7"), 1.5e-7);
    }

    #[test]
    fn test_parse_prefix_and_specials() {
        assert_eq!(parse_number("7abc"), 7.0);
        assert_eq!(parse_number("2e"), 2.0);
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_number("NaN").is_nan());
        assert!(parse_number("").is_nan());
        assert!(parse_number("-").is_nan());
        assert!(parse_number(".").is_nan());
    }

    #[test]
    fn test_formatted_values_parse_back() {
        for value in [0.30000000000000004, 1e21, -2.5e-9, 123456.789] {
            assert_eq!(parse_number(&format_number(value)), value);
        }
    }
}
