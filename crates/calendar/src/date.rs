//! Validated calendar date.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;
use crate::format::DateStyle;
use crate::month::month_length;
use crate::ordinal::{day_difference, to_ordinal_day};

/// Smallest year a [`CalendarDate`] can hold.
pub const MIN_YEAR: i32 = 1;
/// Largest year a [`CalendarDate`] can hold (keeps every date four digits wide).
pub const MAX_YEAR: i32 = 9999;

/// A date in the proleptic Gregorian calendar.
///
/// Always denotes a real calendar date: the constructors reject February 29
/// in common years, April 31, and so on. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    // Field order drives the derived chronological ordering.
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a new `CalendarDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if `year` is outside 1..=9999,
    /// [`CalendarError::InvalidMonth`] if `month` is outside 1..=12, and
    /// [`CalendarError::InvalidDay`] if `day` does not exist in that month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::InvalidYear { year });
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = month_length(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Parses `YYYY-MM-DD`, or the day-first `DD/MM/YYYY` form.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Format`] if the text matches neither layout
    /// or names a date that does not exist.
    pub fn parse(text: &str) -> Result<Self, CalendarError> {
        let trimmed = text.trim();
        if trimmed.contains('-') {
            DateStyle::Iso.parse(trimmed)
        } else if trimmed.contains('/') {
            DateStyle::Dmy.parse(trimmed)
        } else {
            Err(CalendarError::format(
                text,
                "expected YYYY-MM-DD or DD/MM/YYYY",
            ))
        }
    }

    /// Parses text laid out in exactly the given style.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Format`] on any mismatch.
    pub fn parse_with_style(text: &str, style: DateStyle) -> Result<Self, CalendarError> {
        style.parse(text.trim())
    }

    /// Formats the date in the given style.
    pub fn format(self, style: DateStyle) -> String {
        style.format(self)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(month, day)` as a tuple.
    pub fn month_day(self) -> (u8, u8) {
        (self.month, self.day)
    }

    /// Returns the day number relative to 2000-01-01 (day 1).
    pub fn ordinal_day(self) -> i64 {
        to_ordinal_day(self)
    }

    /// Returns the signed number of days from `self` to `other`.
    ///
    /// Positive when `other` is later.
    pub fn days_until(self, other: CalendarDate) -> i64 {
        day_difference(self, other)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = CalendarDate::new(2024, 2, 29).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 29);
        assert_eq!(date.month_day(), (2, 29));
    }

    #[test]
    fn new_invalid_year() {
        assert_eq!(
            CalendarDate::new(0, 1, 1).unwrap_err(),
            CalendarError::InvalidYear { year: 0 }
        );
        assert_eq!(
            CalendarDate::new(10_000, 1, 1).unwrap_err(),
            CalendarError::InvalidYear { year: 10_000 }
        );
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            CalendarDate::new(2000, 13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn new_feb_29_common_year() {
        assert_eq!(
            CalendarDate::new(2023, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                year: 2023,
                max_day: 28,
            }
        );
    }

    #[test]
    fn new_april_31() {
        assert!(matches!(
            CalendarDate::new(2024, 4, 31),
            Err(CalendarError::InvalidDay { max_day: 30, .. })
        ));
    }

    #[test]
    fn display_is_iso() {
        let date = CalendarDate::new(987, 3, 5).unwrap();
        assert_eq!(date.to_string(), "0987-03-05");
    }

    #[test]
    fn from_str_delegates_to_parse() {
        let date: CalendarDate = "1990-03-15".parse().unwrap();
        assert_eq!(date, CalendarDate::new(1990, 3, 15).unwrap());
    }

    #[test]
    fn parse_accepts_day_first_slashes() {
        let date = CalendarDate::parse("15/03/1990").unwrap();
        assert_eq!(date, CalendarDate::new(1990, 3, 15).unwrap());
    }

    #[test]
    fn parse_rejects_other_layouts() {
        assert!(matches!(
            CalendarDate::parse("19900315"),
            Err(CalendarError::Format { .. })
        ));
        assert!(matches!(
            CalendarDate::parse(""),
            Err(CalendarError::Format { .. })
        ));
    }

    #[test]
    fn ord_chronological() {
        let a = CalendarDate::new(1999, 12, 31).unwrap();
        let b = CalendarDate::new(2000, 1, 1).unwrap();
        let c = CalendarDate::new(2000, 2, 1).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn days_until_sign() {
        let a = CalendarDate::new(2025, 3, 10).unwrap();
        let b = CalendarDate::new(2025, 3, 15).unwrap();
        assert_eq!(a.days_until(b), 5);
        assert_eq!(b.days_until(a), -5);
    }

    #[test]
    fn copy_and_hash_traits() {
        fn assert_impl<T: Copy + std::hash::Hash + Send + Sync>() {}
        assert_impl::<CalendarDate>();
    }
}
