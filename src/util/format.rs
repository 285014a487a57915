/// Values closer than this to an integer are displayed as that integer.
pub const INTEGRAL_TOLERANCE: f64 = 1e-10;
/// Number of fractional digits rendered before trailing zeros are trimmed.
pub const DECIMAL_PLACES: usize = 12;

/// Formats an evaluation result for display.
///
/// Integral values (within [`INTEGRAL_TOLERANCE`]) are rendered without a
/// decimal point. Other values are rendered with [`DECIMAL_PLACES`] fractional
/// digits, then trailing zeros and a trailing `.` are removed. Non-finite
/// values use the `f64` display form (`inf`, `-inf`, `NaN`).
///
/// ## Example
/// ```
/// use reckon::format_result;
///
/// assert_eq!(format_result(5.0), "5");
/// assert_eq!(format_result(0.5), "0.5");
/// assert_eq!(format_result(0.1 + 0.2), "0.3");
/// assert_eq!(format_result(1.0 / 3.0), "0.333333333333");
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let nearest = value.round();
    if (value - nearest).abs() < INTEGRAL_TOLERANCE {
        // `-0.0` would otherwise print as "-0".
        if nearest == 0.0 {
            return "0".to_string();
        }
        return format!("{nearest:.0}");
    }

    let fixed = format!("{value:.precision$}", precision = DECIMAL_PLACES);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(format_result(5.0), "5");
        assert_eq!(format_result(-12.0), "-12");
        assert_eq!(format_result(0.0), "0");
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(format_result(1e20), "100000000000000000000");
    }

    #[test]
    fn near_integers_snap() {
        assert_eq!(format_result(2.000_000_000_01), "2");
        assert_eq!(format_result(2.999_999_999_999), "3");
        assert_eq!(format_result(-1e-12), "0");
    }

    #[test]
    fn fractions_are_trimmed() {
        assert_eq!(format_result(0.5), "0.5");
        assert_eq!(format_result(-0.25), "-0.25");
        assert_eq!(format_result(200.1), "200.1");
        assert_eq!(format_result(2.0 / 3.0), "0.666666666667");
    }

    #[test]
    fn tiny_values_outside_tolerance_keep_their_digits() {
        assert_eq!(format_result(1e-9), "0.000000001");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_result(f64::INFINITY), "inf");
        assert_eq!(format_result(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_result(f64::NAN), "NaN");
    }
}
