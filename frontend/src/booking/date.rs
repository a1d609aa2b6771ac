use chrono::NaiveDate;

use crate::error::BookingError;

/// `<input type="date">` value format.
const INPUT_FORMAT: &str = "%Y-%m-%d";
/// en-GB long date: weekday, day, month, year.
const LONG_FORMAT: &str = "%A %-d %B %Y";

/// Formats a `YYYY-MM-DD` value as e.g. "Wednesday 25 December 2024".
///
/// The value is treated as a calendar date, so the visitor's time zone can
/// never shift it to the neighbouring day.
pub fn format_long_date(value: &str) -> Result<String, BookingError> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, INPUT_FORMAT)
        .map(|date| date.format(LONG_FORMAT).to_string())
        .map_err(|_| BookingError::InvalidDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn christmas_day() {
        assert_eq!(format_long_date("2024-12-25").unwrap(), "Wednesday 25 December 2024");
    }

    #[test]
    fn single_digit_day_has_no_padding() {
        assert_eq!(format_long_date("2025-03-01").unwrap(), "Saturday 1 March 2025");
    }

    #[test]
    fn leap_day() {
        assert_eq!(format_long_date("2024-02-29").unwrap(), "Thursday 29 February 2024");
        assert!(format_long_date("2023-02-29").is_err());
    }

    #[test]
    fn same_input_same_output() {
        let first = format_long_date("2026-10-16").unwrap();
        assert_eq!(format_long_date("2026-10-16").unwrap(), first);
        assert_eq!(format_long_date(" 2026-10-16 ").unwrap(), first);
    }

    #[test]
    fn garbage_is_an_error() {
        assert_eq!(
            format_long_date("tomorrow"),
            Err(BookingError::InvalidDate("tomorrow".to_string()))
        );
    }
}
