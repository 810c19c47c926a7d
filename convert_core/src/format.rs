//! # Value Formatting
//!
//! Renders conversion results for display, history entries and comparison
//! tables.
//!
//! Magnitudes of at least `1e6`, and non-zero magnitudes below `1e-6`, use
//! exponential notation (`1.23e+7`, `5.000e-7`). Everything else, zero
//! included, is fixed-point with exactly `precision` decimals.
//!
//! Rounding works on the exact decimal value of the `f64`, and a tie goes
//! away from zero: `2.5` at precision 0 is `"3"`, `-2.5` is `"-3"`.
//!
//! ## Example
//!
//! ```rust
//! use convert_core::format::format_value;
//!
//! assert_eq!(format_value(999_999.0, 2), "999999.00");
//! assert_eq!(format_value(1_000_000.0, 2), "1.00e+6");
//! assert_eq!(format_value(0.0, 4), "0.0000");
//! ```

use crate::units::Unit;

/// Decimal places used when the caller has no preference
pub const DEFAULT_PRECISION: usize = 4;

/// Largest precision offered to users
pub const MAX_PRECISION: usize = 10;

const LARGE_THRESHOLD: f64 = 1e6;
const SMALL_THRESHOLD: f64 = 1e-6;

/// Format a number with `precision` decimal places.
///
/// `precision` is unsigned, so a negative precision cannot be expressed.
/// Values above [`MAX_PRECISION`] are accepted here; only user settings are
/// range-checked.
pub fn format_value(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }

    let magnitude = value.abs();
    if magnitude >= LARGE_THRESHOLD || (magnitude < SMALL_THRESHOLD && value != 0.0) {
        return exponential(value, precision);
    }

    fixed(value, precision)
}

/// Format a number the way JavaScript's `Number#toString` does.
///
/// Plain decimal between `1e-6` and `1e21`, shortest exponential form
/// outside that range (`1e-9`, `2.5e+21`).
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && (magnitude < 1e-6 || magnitude >= 1e21) {
        return signed_exponent(&format!("{:e}", value));
    }

    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}", value)
}

/// Format a value followed by the unit's abbreviation, e.g. "3.2808 ft"
pub fn format_quantity(value: f64, unit: &Unit, precision: usize) -> String {
    format!("{} {}", format_value(value, precision), unit.abbreviation)
}

/// Digits after the decimal point needed to print any f64 exactly.
const EXACT_DIGITS: usize = 1100;

/// Fixed-point with `precision` decimals, ties rounded away from zero
fn fixed(value: f64, precision: usize) -> String {
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let (int_digits, frac_digits) = round_half_up(int_part, frac_part, precision);

    let sign = if value < 0.0 { "-" } else { "" };
    if frac_digits.is_empty() {
        format!("{}{}", sign, int_digits)
    } else {
        format!("{}{}.{}", sign, int_digits, frac_digits)
    }
}

/// Mantissa with `precision` decimals and a signed exponent, ties rounded
/// away from zero
fn exponential(value: f64, precision: usize) -> String {
    let exact = format!("{:.*e}", EXACT_DIGITS, value.abs());
    let Some((mantissa, exponent)) = exact.split_once('e') else {
        return exact;
    };
    let mut exponent: i32 = exponent.parse().unwrap_or(0);

    let (lead, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let (mut lead_digits, frac_digits) = round_half_up(lead, frac, precision);

    // 9.99 -> 10.0: the fraction is all zeros, renormalize to 1.00
    if lead_digits.len() > 1 {
        lead_digits.truncate(1);
        exponent += 1;
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let mantissa = if frac_digits.is_empty() {
        lead_digits
    } else {
        format!("{}.{}", lead_digits, frac_digits)
    };
    signed_exponent(&format!("{}{}e{}", sign, mantissa, exponent))
}

/// Round the decimal `int_part.frac_part` to `precision` fractional digits.
///
/// Both parts are plain ASCII digits of a non-negative number. A dropped
/// remainder of at least one half rounds up, so exact ties go away from zero.
fn round_half_up(int_part: &str, frac_part: &str, precision: usize) -> (String, String) {
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(precision))
        .collect();
    digits.resize(int_part.len() + precision, b'0');

    if matches!(frac_part.as_bytes().get(precision), Some(d) if *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - precision;
    let int_digits = digits[..split].iter().map(|&d| d as char).collect();
    let frac_digits = digits[split..].iter().map(|&d| d as char).collect();
    (int_digits, frac_digits)
}

/// Spell a non-negative exponent with an explicit `+`
fn signed_exponent(raw: &str) -> String {
    match raw.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => raw.to_string(),
    }
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value > 0.0 {
        "Infinity".to_string()
    } else {
        "-Infinity".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::REGISTRY;

    #[test]
    fn test_fixed_point() {
        assert_eq!(format_value(999_999.0, 2), "999999.00");
        assert_eq!(format_value(3.28084, 4), "3.2808");
        assert_eq!(format_value(-12.5, 1), "-12.5");
        assert_eq!(format_value(42.0, 0), "42");
    }

    #[test]
    fn test_large_values_exponential() {
        assert_eq!(format_value(1_000_000.0, 2), "1.00e+6");
        assert_eq!(format_value(-25_000_000.0, 1), "-2.5e+7");
        assert_eq!(format_value(9.461e15, 3), "9.461e+15");
        assert_eq!(format_value(1_234_567.0, 0), "1e+6");
    }

    #[test]
    fn test_small_values_exponential() {
        assert_eq!(format_value(0.0000005, 3), "5.000e-7");
        assert_eq!(format_value(-1e-9, 2), "-1.00e-9");
    }

    #[test]
    fn test_threshold_edges() {
        // 1e-6 itself is not below the threshold.
        assert_eq!(format_value(0.000001, 6), "0.000001");
        assert!(format_value(999_999.99, 4).starts_with("999999.99"));
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(format_value(2.5, 0), "3");
        assert_eq!(format_value(0.125, 2), "0.13");
        assert_eq!(format_value(-2.5, 0), "-3");
        assert_eq!(format_value(2.5e6, 0), "3e+6");
        assert_eq!(format_value(1.25e7, 1), "1.3e+7");
    }

    #[test]
    fn test_rounding_carries() {
        assert_eq!(format_value(9.995, 2), "9.99");
        assert_eq!(format_value(0.5, 0), "1");
        assert_eq!(format_value(99.96, 1), "100.0");
        assert_eq!(format_value(9.96e6, 1), "1.0e+7");
        assert_eq!(format_value(-9.96e-7, 0), "-1e-6");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.3048), "0.3048");
        assert_eq!(format_number(1e-9), "1e-9");
        assert_eq!(format_number(1e-6), "0.000001");
        assert_eq!(format_number(9.461e15), "9461000000000000");
        assert_eq!(format_number(2.5e21), "2.5e+21");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_zero_stays_fixed_point() {
        assert_eq!(format_value(0.0, 4), "0.0000");
        assert_eq!(format_value(-0.0, 2), "0.00");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_value(f64::NAN, 4), "NaN");
        assert_eq!(format_value(f64::INFINITY, 4), "Infinity");
        assert_eq!(format_value(f64::NEG_INFINITY, 4), "-Infinity");
    }

    #[test]
    fn test_precision_beyond_ui_range() {
        assert_eq!(format_value(0.5, 12), "0.500000000000");
    }

    #[test]
    fn test_format_quantity() {
        let foot = REGISTRY.get("foot").unwrap();
        assert_eq!(format_quantity(3.28084, foot, 2), "3.28 ft");
    }
}
