//! Ordinal day numbers and day differences.

use crate::date::CalendarDate;
use crate::month::days_before_month;

/// Year whose January 1 is ordinal day 1.
pub const EPOCH_YEAR: i32 = 2000;

/// Leap days in the years `1..year`.
fn leap_days_before(year: i32) -> i64 {
    let y = i64::from(year) - 1;
    y / 4 - y / 100 + y / 400
}

/// Days from the epoch's January 1 to `year`'s January 1.
///
/// Negative for years before the epoch.
fn days_before_year(year: i32) -> i64 {
    365 * (i64::from(year) - i64::from(EPOCH_YEAR)) + leap_days_before(year)
        - leap_days_before(EPOCH_YEAR)
}

/// Returns the day number of `date` relative to the epoch.
///
/// 2000-01-01 is day 1 and 1999-12-31 is day 0; the numbering is strictly
/// increasing and extends below zero for earlier dates.
pub fn to_ordinal_day(date: CalendarDate) -> i64 {
    days_before_year(date.year())
        + i64::from(days_before_month(date.year(), date.month()))
        + i64::from(date.day())
}

/// Returns `to_ordinal_day(b) - to_ordinal_day(a)`.
///
/// Positive when `b` is chronologically after `a`.
pub fn day_difference(a: CalendarDate, b: CalendarDate) -> i64 {
    to_ordinal_day(b) - to_ordinal_day(a)
}
