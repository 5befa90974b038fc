//! # Field Parsing
//!
//! Turns the string fields of a [`Receipt`](crate::Receipt) into the
//! numbers, dates, and clock times the scoring rules compare against.
//!
//! ## Two Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Strict parsers              Lenient accessors (used by the rules)      │
//! │  ──────────────              ─────────────────────────────────────      │
//! │  parse_decimal ─► Result     decimal_or_zero  ─► f64    (0.0)          │
//! │  parse_date    ─► Result     purchase_day     ─► u32    (1)            │
//! │  parse_time    ─► Result     clock_or_midnight ─► (h,m) (0, 0)         │
//! │                                                                         │
//! │  A failure falls back to the field's zero value and is logged at      │
//! │  debug level. The zero calendar date is 0001-01-01, so a bad date     │
//! │  still yields day 1.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use tracing::debug;

use crate::error::{CoreError, CoreResult};

/// Purchase date format: `2022-01-01`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Purchase time format: `13:01` (24-hour clock).
pub const TIME_FORMAT: &str = "%H:%M";

/// Day of month of the zero calendar date (0001-01-01).
pub const ZERO_DATE_DAY: u32 = 1;

// =============================================================================
// Strict Parsers
// =============================================================================

/// Parses a decimal string as a double-precision float.
///
/// `NaN`, `inf` and literals too large for an `f64` parse to their
/// non-finite values; the scoring rules decide what those are worth.
///
/// ## Example
/// ```rust
/// use points_core::parse::parse_decimal;
///
/// assert_eq!(parse_decimal("total", "35.35").unwrap(), 35.35);
/// assert!(parse_decimal("total", "$35").is_err());
/// assert!(parse_decimal("total", "NaN").unwrap().is_nan());
/// assert_eq!(parse_decimal("total", "1e400").unwrap(), f64::INFINITY);
/// ```
pub fn parse_decimal(field: &'static str, value: &str) -> CoreResult<f64> {
    value
        .parse()
        .map_err(|e| CoreError::field_parse(field, value, e))
}

/// Parses a `YYYY-MM-DD` purchase date.
///
/// Year, month and day must be exactly four, two and two digits.
pub fn parse_date(value: &str) -> CoreResult<NaiveDate> {
    if !has_date_shape(value) {
        return Err(CoreError::field_parse(
            "purchaseDate",
            value,
            "expected YYYY-MM-DD",
        ));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| CoreError::field_parse("purchaseDate", value, e))
}

/// Parses an `HH:MM` purchase time.
///
/// The hour may be one or two digits; the minute is always two.
pub fn parse_time(value: &str) -> CoreResult<NaiveTime> {
    if !has_time_shape(value) {
        return Err(CoreError::field_parse(
            "purchaseTime",
            value,
            "expected HH:MM",
        ));
    }

    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|e| CoreError::field_parse("purchaseTime", value, e))
}

// chrono's %m, %d and %M accept a single digit, so the widths are checked first.

fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn has_time_shape(value: &str) -> bool {
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    match value.split_once(':') {
        Some((hour, minute)) => {
            (1..=2).contains(&hour.len())
                && minute.len() == 2
                && all_digits(hour)
                && all_digits(minute)
        }
        None => false,
    }
}

// =============================================================================
// Lenient Accessors
// =============================================================================

/// Parses a decimal field, falling back to `0.0`.
pub fn decimal_or_zero(field: &'static str, value: &str) -> f64 {
    parse_decimal(field, value).unwrap_or_else(|e| {
        debug!(error = %e, "Falling back to 0.0");
        0.0
    })
}

/// Day of month of the purchase date, or [`ZERO_DATE_DAY`] if it does not parse.
pub fn purchase_day(value: &str) -> u32 {
    match parse_date(value) {
        Ok(date) => date.day(),
        Err(e) => {
            debug!(error = %e, "Falling back to the zero date");
            ZERO_DATE_DAY
        }
    }
}

/// `(hour, minute)` of the purchase time, or midnight if it does not parse.
pub fn clock_or_midnight(value: &str) -> (u32, u32) {
    match parse_time(value) {
        Ok(time) => (time.hour(), time.minute()),
        Err(e) => {
            debug!(error = %e, "Falling back to midnight");
            (0, 0)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("price", "12.25").unwrap(), 12.25);
        assert_eq!(parse_decimal("price", "0").unwrap(), 0.0);
        assert_eq!(parse_decimal("price", "-1.5").unwrap(), -1.5);

        assert!(parse_decimal("price", "").is_err());
        assert!(parse_decimal("price", "12,25").is_err());
        assert!(parse_decimal("price", " 12.25").is_err());
    }

    #[test]
    fn test_parse_decimal_keeps_non_finite_values() {
        assert!(parse_decimal("total", "NaN").unwrap().is_nan());
        assert_eq!(parse_decimal("total", "inf").unwrap(), f64::INFINITY);
        assert_eq!(parse_decimal("total", "-1e400").unwrap(), f64::NEG_INFINITY);
        assert!(decimal_or_zero("total", "NaN").is_nan());
    }

    #[test]
    fn test_parse_error_names_field() {
        let err = parse_decimal("price", "free").unwrap_err();
        assert!(matches!(
            err,
            CoreError::FieldParse { field: "price", ref value, .. } if value == "free"
        ));
    }

    #[test]
    fn test_decimal_or_zero() {
        assert_eq!(decimal_or_zero("total", "9.00"), 9.0);
        assert_eq!(decimal_or_zero("total", "nine"), 0.0);
        assert_eq!(decimal_or_zero("total", ""), 0.0);
    }

    #[test]
    fn test_purchase_day() {
        assert_eq!(purchase_day("2022-01-01"), 1);
        assert_eq!(purchase_day("2022-03-20"), 20);
        assert_eq!(purchase_day("2022-02-30"), ZERO_DATE_DAY);
        assert_eq!(purchase_day("01/02/2022"), ZERO_DATE_DAY);
        assert_eq!(purchase_day(""), ZERO_DATE_DAY);
    }

    #[test]
    fn test_date_needs_two_digit_month_and_day() {
        assert_eq!(purchase_day("2022-03-2"), ZERO_DATE_DAY);
        assert_eq!(purchase_day("2022-3-02"), ZERO_DATE_DAY);
        assert_eq!(purchase_day("22-03-02"), ZERO_DATE_DAY);
        assert_eq!(purchase_day("12022-03-02"), ZERO_DATE_DAY);
        assert_eq!(purchase_day(" 2022-03-02"), ZERO_DATE_DAY);
        assert!(parse_date("2022-03-2").is_err());
        assert_eq!(purchase_day("2022-03-02"), 2);
    }

    #[test]
    fn test_clock_or_midnight() {
        assert_eq!(clock_or_midnight("14:33"), (14, 33));
        assert_eq!(clock_or_midnight("00:00"), (0, 0));
        assert_eq!(clock_or_midnight("25:00"), (0, 0));
        assert_eq!(clock_or_midnight("2pm"), (0, 0));
        assert_eq!(clock_or_midnight("14:33:10"), (0, 0));
    }

    #[test]
    fn test_time_needs_two_digit_minute() {
        assert_eq!(clock_or_midnight("9:05"), (9, 5));
        assert_eq!(clock_or_midnight("14:5"), (0, 0));
        assert_eq!(clock_or_midnight("014:05"), (0, 0));
        assert_eq!(clock_or_midnight(":05"), (0, 0));
        assert!(parse_time("14:5").is_err());
    }
}
