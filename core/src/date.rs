// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

//! Helpers for canonical `YYYY-MM-DD` date strings.
//!
//! [`CalendarDate`] compares lexically, which matches chronological order for
//! this format, so range checks never go through chrono. Conversions to
//! [`NaiveDate`] exist for the places that need real arithmetic (grid
//! construction, day stepping).

use chrono::{Local, NaiveDate};
use remcal_api::{CalendarDate, DateRange};

const FORMAT: &str = "%Y-%m-%d";

/// Today's date according to the client clock.
pub fn today() -> CalendarDate {
    from_naive(Local::now().date_naive())
}

/// Formats a chrono date in canonical form.
pub fn from_naive(date: NaiveDate) -> CalendarDate {
    CalendarDate::new(date.format(FORMAT).to_string())
}

/// Parses a canonical date string back into a chrono date.
///
/// Returns `None` for malformed input; dates produced by [`from_naive`],
/// the grid builder, or the service always parse.
pub fn to_naive(date: &CalendarDate) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.as_str(), FORMAT).ok()
}

/// Validates user-supplied input as a canonical calendar date.
pub fn parse_date(input: &str) -> Result<CalendarDate, String> {
    match NaiveDate::parse_from_str(input, FORMAT) {
        Ok(parsed) => Ok(from_naive(parsed)),
        Err(_) => Err(format!("invalid date '{input}', expected YYYY-MM-DD")),
    }
}

/// The next calendar day, or `None` if `date` is malformed.
pub fn succ(date: &CalendarDate) -> Option<CalendarDate> {
    to_naive(date).and_then(|d| d.succ_opt()).map(from_naive)
}

/// Inclusive range membership under lexical comparison.
pub fn is_within_range(date: &CalendarDate, min: &CalendarDate, max: &CalendarDate) -> bool {
    date >= min && date <= max
}

/// Clamps a date into the allowed range.
pub fn clamp_to_range(date: &CalendarDate, range: &DateRange) -> CalendarDate {
    if date < &range.min_date {
        range.min_date.clone()
    } else if date > &range.max_date {
        range.max_date.clone()
    } else {
        date.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_round_trip() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let date = from_naive(naive);
        assert_eq!(date.as_str(), "2024-03-07");
        assert_eq!(to_naive(&date), Some(naive));
    }

    #[test]
    fn within_range_is_inclusive_lexical() {
        let min = CalendarDate::from("2024-01-10");
        let max = CalendarDate::from("2024-01-20");
        assert!(is_within_range(&CalendarDate::from("2024-01-10"), &min, &max));
        assert!(is_within_range(&CalendarDate::from("2024-01-15"), &min, &max));
        assert!(is_within_range(&CalendarDate::from("2024-01-20"), &min, &max));
        assert!(!is_within_range(&CalendarDate::from("2024-01-09"), &min, &max));
        assert!(!is_within_range(&CalendarDate::from("2024-01-21"), &min, &max));
        // lexical order spans month and year boundaries
        assert!(!is_within_range(&CalendarDate::from("2023-12-31"), &min, &max));
        assert!(!is_within_range(&CalendarDate::from("2024-02-01"), &min, &max));
    }

    #[test]
    fn clamp_moves_out_of_range_dates_to_the_nearest_bound() {
        let range = DateRange {
            min_date: CalendarDate::from("2024-01-10"),
            max_date: CalendarDate::from("2024-01-20"),
        };
        let clamped = clamp_to_range(&CalendarDate::from("2024-01-25"), &range);
        assert_eq!(clamped.as_str(), "2024-01-20");
        let clamped = clamp_to_range(&CalendarDate::from("2023-12-01"), &range);
        assert_eq!(clamped.as_str(), "2024-01-10");
        let kept = clamp_to_range(&CalendarDate::from("2024-01-12"), &range);
        assert_eq!(kept.as_str(), "2024-01-12");
    }

    #[test]
    fn succ_steps_over_month_and_year_boundaries() {
        assert_eq!(
            succ(&CalendarDate::from("2024-02-29")),
            Some(CalendarDate::from("2024-03-01"))
        );
        assert_eq!(
            succ(&CalendarDate::from("2024-12-31")),
            Some(CalendarDate::from("2025-01-01"))
        );
        assert_eq!(succ(&CalendarDate::from("not-a-date")), None);
    }

    #[test]
    fn parse_date_rejects_malformed_input() {
        assert!(parse_date("2024-06-01").is_ok());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("01/06/2024").is_err());
    }
}
