//! Input parsing and validation for form values
//!
//! Form fields arrive as raw text. Numbers are read the way a browser's
//! `parseFloat` reads them: leading whitespace is skipped and the longest
//! numeric prefix wins, so `"70kg"` reads as `70.0`.

use crate::errors::{MeasurementError, MeasurementField};

/// Parse the leading number of a form value
///
/// Returns `None` when the text does not start with a number.
pub fn parse_leading_number(input: &str) -> Option<f64> {
    let text = input.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parse and validate a single measurement input
///
/// The value must be a finite number strictly greater than zero.
pub fn parse_positive(input: &str, field: MeasurementField) -> Result<f64, MeasurementError> {
    let value = parse_leading_number(input).ok_or(MeasurementError::Unparseable(field))?;
    if !value.is_finite() {
        return Err(MeasurementError::NonFinite(field));
    }
    if value <= 0.0 {
        return Err(MeasurementError::NonPositive(field));
    }
    Ok(value)
}
