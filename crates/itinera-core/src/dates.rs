//! Calendar date helpers: parsing, range expansion and weekday labels.
//!
//! Dates are carried as [`jiff::civil::Date`] everywhere inside the crate and
//! stored as ISO `YYYY-MM-DD`. Older data written by the web front-end used
//! locale strings such as `2025/1/2`, so every reader goes through
//! [`parse_date`], which accepts both forms.

use jiff::{
    ToSpan, Zoned,
    civil::{Date, Weekday},
};

use crate::error::{ItineraryError, Result};

/// Parses `YYYY-MM-DD` or `YYYY/M/D` (zero padding optional).
pub fn parse_date(input: &str) -> Result<Date> {
    let trimmed = input.trim();
    let invalid = |reason: &str| {
        ItineraryError::invalid_input("date").with_reason(format!("'{trimmed}': {reason}"))
    };

    let separator = if trimmed.contains('-') { '-' } else { '/' };
    let mut parts = trimmed.split(separator);
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid("expected YYYY-MM-DD"));
    };

    let year: i16 = year.parse().map_err(|_| invalid("bad year"))?;
    let month: i8 = month.parse().map_err(|_| invalid("bad month"))?;
    let day: i8 = day.parse().map_err(|_| invalid("bad day"))?;

    Date::new(year, month, day).map_err(|e| invalid(&e.to_string()))
}

/// Expands the inclusive range `[start, end]` into one date per calendar day.
///
/// Returns an empty list when `start` is after `end`.
pub fn expand_range(start: Date, end: Date) -> Vec<Date> {
    if start > end {
        return Vec::new();
    }
    start.series(1.day()).take_while(|d| *d <= end).collect()
}

/// Short English weekday label used for the stored `weekDay` field.
pub fn weekday_label(date: Date) -> &'static str {
    match date.weekday() {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

/// Today's date in the system time zone.
pub fn today() -> Date {
    Zoned::now().date()
}

/// Serde adapter writing ISO dates and reading ISO or legacy slash dates.
pub mod lenient {
    use jiff::civil::Date;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(date)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_parse_iso_and_slash_forms() {
        assert_eq!(parse_date("2025-01-02").unwrap(), date(2025, 1, 2));
        assert_eq!(parse_date("2025/01/02").unwrap(), date(2025, 1, 2));
        assert_eq!(parse_date("2025/1/2").unwrap(), date(2025, 1, 2));
        assert_eq!(parse_date(" 2025-12-31 ").unwrap(), date(2025, 12, 31));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_date("").is_err());
        assert!(parse_date("2025-01").is_err());
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("2025-01-02-03").is_err());
        assert!(parse_date("tomorrow").is_err());
    }

    #[test]
    fn test_expand_range_is_inclusive_and_gapless() {
        let days = expand_range(date(2025, 1, 30), date(2025, 2, 2));
        assert_eq!(
            days,
            vec![
                date(2025, 1, 30),
                date(2025, 1, 31),
                date(2025, 2, 1),
                date(2025, 2, 2)
            ]
        );
    }

    #[test]
    fn test_expand_range_single_day_and_inverted() {
        assert_eq!(
            expand_range(date(2025, 1, 1), date(2025, 1, 1)),
            vec![date(2025, 1, 1)]
        );
        assert!(expand_range(date(2025, 1, 2), date(2025, 1, 1)).is_empty());
    }

    #[test]
    fn test_expand_range_across_leap_day() {
        let days = expand_range(date(2024, 2, 28), date(2024, 3, 1));
        assert_eq!(days.len(), 3);
        assert_eq!(days[1], date(2024, 2, 29));
    }

    #[test]
    fn test_weekday_labels() {
        // 2025-01-01 was a Wednesday
        assert_eq!(weekday_label(date(2025, 1, 1)), "Wed");
        assert_eq!(weekday_label(date(2025, 1, 5)), "Sun");
    }
}
