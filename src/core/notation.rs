//! Suffix notation for the very large numbers the game displays.
//!
//! Numbers like `1.5K`, `2.3M` or `4.1AA` are parsed into plain `f64` values and
//! formatted back using the largest suffix that fits. Suffixes are case-sensitive:
//! `q` (quadrillion) and `Q` (quintillion) are different units, as are `s` and `S`.

use crate::errors::{Error, Result};

/// Suffix table ordered from the smallest to the largest unit.
pub const NOTATIONS: [(&str, f64); 21] = [
    ("K", 1e3),
    ("M", 1e6),
    ("B", 1e9),
    ("T", 1e12),
    ("q", 1e15),
    ("Q", 1e18),
    ("s", 1e21),
    ("S", 1e24),
    ("O", 1e27),
    ("N", 1e30),
    ("D", 1e33),
    ("AA", 1e36),
    ("AB", 1e39),
    ("AC", 1e42),
    ("AD", 1e45),
    ("AE", 1e48),
    ("AF", 1e51),
    ("AG", 1e54),
    ("AH", 1e57),
    ("AI", 1e60),
    ("AJ", 1e63),
];

/// Precision used when a caller has no preference.
pub const DEFAULT_PRECISION: usize = 2;

const SINGLE_LETTER_SUFFIXES: &str = "KMBTqQsSOND";

/// A number as the user supplied it: raw text or an already numeric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberInput<'a> {
    /// Text such as `"1.5K"` or `"250"`
    Text(&'a str),
    /// A value that needs no parsing
    Value(f64),
}

impl<'a> From<&'a str> for NumberInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for NumberInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl From<f64> for NumberInput<'_> {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

impl From<u32> for NumberInput<'_> {
    fn from(value: u32) -> Self {
        Self::Value(f64::from(value))
    }
}

/// Looks up the multiplier for a suffix, matching case-sensitively.
#[must_use]
pub fn notation_multiplier(suffix: &str) -> Option<f64> {
    NOTATIONS
        .iter()
        .find(|(name, _)| *name == suffix)
        .map(|&(_, multiplier)| multiplier)
}

/// Parses user input such as `"1.5K"`, `"12"` or `"3.2AB"` into a number.
///
/// Already numeric input is returned unchanged. Text without a recognised suffix
/// falls back to a prefix float parse, so `"12.5"` works and trailing junk after a
/// valid number is ignored.
///
/// # Errors
/// Returns [`Error::InvalidNumberFormat`] when no number can be read at all.
pub fn parse_number_input<'a>(input: impl Into<NumberInput<'a>>) -> Result<f64> {
    let text = match input.into() {
        NumberInput::Value(value) => return Ok(value),
        NumberInput::Text(text) => text.trim(),
    };

    if let Some((number, suffix)) = split_notation(text) {
        let multiplier = notation_multiplier(suffix).ok_or_else(|| Error::InvalidNotation {
            notation: suffix.to_string(),
        })?;
        let value: f64 = number.parse().map_err(|_| Error::InvalidNumberFormat {
            input: text.to_string(),
        })?;
        return Ok(value * multiplier);
    }

    match parse_float_prefix(text) {
        Some(value) if value.is_finite() => Ok(value),
        _ => Err(Error::InvalidNumberFormat {
            input: text.to_string(),
        }),
    }
}

/// Formats a number with the largest suffix not exceeding it.
///
/// Values below 1000 are rounded to an integer and printed without a suffix.
/// Exact ties round away from zero (`1125` is `1.13K`), quotients from `1e21` up
/// switch to exponent notation and infinite values print as `Infinity`.
#[must_use]
pub fn format_number_output(number: f64, precision: usize) -> String {
    if number < 1000.0 {
        let rounded = (number + 0.5).floor();
        // avoid printing "-0"
        if rounded == 0.0 {
            return "0".to_string();
        }
        return display_number(rounded);
    }

    NOTATIONS
        .iter()
        .rev()
        .find(|&&(_, multiplier)| number >= multiplier)
        .map_or_else(
            || display_number(number),
            |&(suffix, multiplier)| {
                format!("{}{suffix}", to_fixed(number / multiplier, precision))
            },
        )
}

/// Fraction digits needed to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Fixed-point rendering with `precision` decimals.
///
/// `{:.N}` breaks exact ties to even; here they go to the larger magnitude.
fn to_fixed(value: f64, precision: usize) -> String {
    if !value.is_finite() || value.abs() >= 1e21 {
        return display_number(value);
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value);
    let Some((whole, fraction)) = exact.split_once('.') else {
        return format!("{:.*}", precision, value);
    };
    let is_tie = fraction.as_bytes().get(precision) == Some(&b'5')
        && fraction.bytes().skip(precision + 1).all(|b| b == b'0');
    if !is_tie {
        return format!("{:.*}", precision, value);
    }

    let mut truncated = whole.to_string();
    if precision > 0 {
        truncated.push('.');
        truncated.push_str(&fraction[..precision]);
    }
    increment_last_digit(&truncated)
}

/// Adds one unit in the last place of a decimal string: `"9.99"` becomes `"10.00"`.
fn increment_last_digit(decimal: &str) -> String {
    let mut bytes = decimal.as_bytes().to_vec();
    let mut carry = true;
    for digit in bytes.iter_mut().rev().filter(|b| b.is_ascii_digit()) {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    if carry {
        let sign_len = usize::from(bytes.first() == Some(&b'-'));
        bytes.insert(sign_len, b'1');
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Plain number text: `Infinity` / `-Infinity`, and `d.ddde+NN` from `1e21` up.
fn display_number(value: f64) -> String {
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value.abs() >= 1e21 {
        return format!("{value:e}").replacen('e', "e+", 1);
    }
    value.to_string()
}

/// Splits `<digits>[.<digits>]<suffix>` into its numeric part and suffix.
///
/// Accepted suffixes are a single letter from `KMBTqQsSOND` or `A` followed by
/// `A`..=`J`.
fn split_notation(text: &str) -> Option<(&str, &str)> {
    let suffix_len = if text.len() >= 2
        && text
            .get(text.len() - 2..)
            .is_some_and(is_double_suffix)
    {
        2
    } else if text
        .chars()
        .last()
        .is_some_and(|c| SINGLE_LETTER_SUFFIXES.contains(c))
    {
        1
    } else {
        return None;
    };

    let (number, suffix) = text.split_at(text.len() - suffix_len);
    is_plain_decimal(number).then_some((number, suffix))
}

fn is_double_suffix(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    bytes.len() == 2 && bytes[0] == b'A' && (b'A'..=b'J').contains(&bytes[1])
}

/// `\d+` or `\d*\.\d+`
fn is_plain_decimal(number: &str) -> bool {
    match number.split_once('.') {
        None => !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit()),
        Some((whole, fraction)) => {
            whole.bytes().all(|b| b.is_ascii_digit())
                && !fraction.is_empty()
                && fraction.bytes().all(|b| b.is_ascii_digit())
        }
    }
}

/// Reads the longest leading decimal literal (sign, digits, fraction, exponent).
fn parse_float_prefix(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        let sign = if bytes.first() == Some(&b'-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - digits_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        mantissa_digits += fraction_end - fraction_start;
        if mantissa_digits > 0 {
            end = fraction_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exponent_end = end + 1;
        if exponent_end < bytes.len() && matches!(bytes[exponent_end], b'+' | b'-') {
            exponent_end += 1;
        }
        let exponent_digits_start = exponent_end;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits_start {
            end = exponent_end;
        }
    }

    text[..end].trim_end_matches('.').parse().ok()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_suffixed_values() {
        assert_eq!(parse_number_input("1.5K").unwrap(), 1500.0);
        assert_eq!(parse_number_input("2M").unwrap(), 2_000_000.0);
        assert_eq!(parse_number_input(".5B").unwrap(), 500_000_000.0);
        assert_eq!(parse_number_input("  3T ").unwrap(), 3e12);
        assert_eq!(parse_number_input("1AA").unwrap(), 1e36);
        assert_eq!(parse_number_input("2AJ").unwrap(), 2e63);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(parse_number_input("1q").unwrap(), 1e15);
        assert_eq!(parse_number_input("1Q").unwrap(), 1e18);
        assert_eq!(parse_number_input("1s").unwrap(), 1e21);
        assert_eq!(parse_number_input("1S").unwrap(), 1e24);
        // lowercase k is not a suffix, so only the numeric prefix is read
        assert_eq!(parse_number_input("5k").unwrap(), 5.0);
    }

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_number_input("1234").unwrap(), 1234.0);
        assert_eq!(parse_number_input("12.5").unwrap(), 12.5);
        assert_eq!(parse_number_input("1e3").unwrap(), 1000.0);
        assert_eq!(parse_number_input("-4").unwrap(), -4.0);
        assert_eq!(parse_number_input(42.5).unwrap(), 42.5);
    }

    #[test]
    fn test_parse_unknown_double_suffix_falls_back_to_prefix() {
        assert_eq!(parse_number_input("1.5AK").unwrap(), 1.5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "abc", "K", "Infinity", ".", "-"] {
            let result = parse_number_input(input);
            assert!(
                matches!(result, Err(Error::InvalidNumberFormat { .. })),
                "expected failure for {input:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn test_invalid_number_message_lists_examples() {
        let err = parse_number_input("nope").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("nope"));
        assert!(message.contains("1.5K"));
    }

    #[test]
    fn test_format_threshold() {
        assert_eq!(format_number_output(999.0, 2), "999");
        assert_eq!(format_number_output(999.4, 2), "999");
        assert_eq!(format_number_output(0.2, 2), "0");
        assert_eq!(format_number_output(1000.0, 2), "1.00K");
    }

    #[test]
    fn test_format_picks_largest_unit() {
        assert_eq!(format_number_output(2_500_000.0, 2), "2.50M");
        assert_eq!(format_number_output(1e15, 2), "1.00q");
        assert_eq!(format_number_output(1e18, 2), "1.00Q");
        assert_eq!(format_number_output(4.2e37, 1), "42.0AA");
        assert_eq!(format_number_output(3e66, 2), "3000.00AJ");
    }

    #[test]
    fn test_format_respects_precision() {
        assert_eq!(format_number_output(1_234_567.0, 0), "1M");
        assert_eq!(format_number_output(1_234_567.0, 4), "1.2346M");
    }

    #[test]
    fn test_format_rounds_exact_ties_up() {
        assert_eq!(format_number_output(1125.0, 2), "1.13K");
        assert_eq!(format_number_output(1.625e9, 2), "1.63B");
        assert_eq!(format_number_output(2500.0, 0), "3K");
        assert_eq!(format_number_output(9500.0, 0), "10K");
        // 1.005 is stored just below the midpoint
        assert_eq!(format_number_output(1005.0, 2), "1.00K");
    }

    #[test]
    fn test_to_fixed_ties_on_negative_values() {
        assert_eq!(to_fixed(-2.5, 0), "-3");
        assert_eq!(to_fixed(-9.5, 0), "-10");
        assert_eq!(to_fixed(0.125, 2), "0.13");
    }

    #[test]
    fn test_format_huge_quotient_uses_exponent() {
        assert_eq!(to_fixed(1e21, 2), "1e+21");
        assert_eq!(to_fixed(3.270_817_417_164_752e218, 2), "3.270817417164752e+218");
        assert_eq!(to_fixed(-1.5e22, 2), "-1.5e+22");

        let text = format_number_output(4.2e100, 2);
        assert!(text.ends_with("e+37AJ"), "{text}");
        assert!(text.len() < 30, "{text}");
    }

    #[test]
    fn test_format_infinity() {
        assert_eq!(format_number_output(f64::INFINITY, 2), "InfinityAJ");
        assert_eq!(format_number_output(f64::NEG_INFINITY, 2), "-Infinity");
        assert_eq!(format_number_output(f64::NAN, 2), "NaN");
    }

    #[test]
    fn test_round_trip_within_display_precision() {
        for value in [2_500_000.0, 7_000.0, 1.25e13, 9e40, 3.3e21] {
            let back = parse_number_input(format_number_output(value, 2).as_str()).unwrap();
            assert!(
                ((back - value) / value).abs() < 0.005,
                "{value} came back as {back}"
            );
        }
    }
}
