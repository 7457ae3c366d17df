//! Human-readable rendering of crack times, from milliseconds to spans
//! longer than the age of the universe.

pub const MINUTE: f64 = 60.0;
pub const HOUR: f64 = 3_600.0;
pub const DAY: f64 = 86_400.0;
/// 365-day year, no leap adjustment.
pub const YEAR: f64 = 31_536_000.0;
/// A million years. Anything at or past this is shown in raw seconds.
pub const INCALCULABLE: f64 = 31_536_000_000_000.0;

/// Format a duration given in seconds.
///
/// | seconds             | output                              |
/// |---------------------|-------------------------------------|
/// | < 0.001             | `less than 1 millisecond`           |
/// | < 1                 | `123.45 milliseconds`               |
/// | < 60                | `12.34 seconds`                     |
/// | < 3600              | `1.50 minutes`                      |
/// | < 86400             | `2.00 hours`                        |
/// | < 1 year            | `3.25 days`                         |
/// | < 10^6 years        | `12.3 years`, `1.23e+3 years`       |
/// | otherwise           | `3.15e+13 seconds (incalculable!)`  |
pub fn format(seconds: f64) -> String {
    if seconds < 0.001 {
        return "less than 1 millisecond".to_string();
    }
    if seconds < 1.0 {
        return format!("{:.2} milliseconds", seconds * 1000.0);
    }
    if seconds < MINUTE {
        return format!("{:.2} seconds", seconds);
    }
    if seconds < HOUR {
        return format!("{:.2} minutes", seconds / MINUTE);
    }
    if seconds < DAY {
        return format!("{:.2} hours", seconds / HOUR);
    }
    if seconds < YEAR {
        return format!("{:.2} days", seconds / DAY);
    }
    if seconds < INCALCULABLE {
        return format!("{} years", significant3(seconds / YEAR));
    }
    if !seconds.is_finite() {
        return "infinity seconds (incalculable!)".to_string();
    }
    format!("{} seconds (incalculable!)", exponential(seconds))
}

/// Three significant figures. Fixed-point below 1000 (`1.00`, `12.3`,
/// `123`), exponential with a signed exponent above (`1.23e+3`).
fn significant3(value: f64) -> String {
    let sci = format!("{:.2e}", value);
    let exp = sci
        .split_once('e')
        .and_then(|(_, e)| e.parse::<i32>().ok())
        .unwrap_or(0);

    if (-6..3).contains(&exp) {
        format!("{:.*}", (2 - exp) as usize, value)
    } else {
        exponential(value)
    }
}

/// Two mantissa decimals and an explicit exponent sign: `3.15e+13`.
fn exponential(value: f64) -> String {
    let sci = format!("{:.2e}", value);
    match sci.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => sci,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "less than 1 millisecond")]
    #[case(0.0005, "less than 1 millisecond")]
    #[case(0.001, "1.00 milliseconds")]
    #[case(0.5, "500.00 milliseconds")]
    #[case(1.0, "1.00 seconds")]
    #[case(52.0, "52.00 seconds")]
    #[case(90.0, "1.50 minutes")]
    #[case(3_600.0, "1.00 hours")]
    #[case(86_400.0, "1.00 days")]
    #[case(YEAR, "1.00 years")]
    #[case(YEAR * 12.34, "12.3 years")]
    #[case(YEAR * 123.4, "123 years")]
    #[case(YEAR * 1234.0, "1.23e+3 years")]
    #[case(YEAR * 999_999.0, "1.00e+6 years")]
    fn test_unit_breakpoints(#[case] seconds: f64, #[case] expected: &str) {
        assert_eq!(format(seconds), expected);
    }

    #[test]
    fn test_incalculable_branch() {
        assert_eq!(
            format(INCALCULABLE + 1.0),
            "3.15e+13 seconds (incalculable!)"
        );
        assert_eq!(format(1e300), "1.00e+300 seconds (incalculable!)");
        assert_eq!(format(f64::INFINITY), "infinity seconds (incalculable!)");
    }

    #[test]
    fn test_significant_rounds_up_a_digit() {
        assert_eq!(significant3(9.996), "10.0");
        assert_eq!(significant3(99.96), "100");
        assert_eq!(significant3(999.6), "1.00e+3");
    }

    #[test]
    fn test_just_below_a_minute() {
        // Rounds within the seconds unit rather than switching units.
        assert_eq!(format(59.999), "60.00 seconds");
    }
}
