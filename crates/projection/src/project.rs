//! Next-occurrence and age computation.

use cake_calendar::{CalendarDate, day_difference, is_leap_year};
use tracing::trace;

use crate::config::{FutureBirthPolicy, LeapDayPolicy, ProjectionConfig};
use crate::error::ProjectionError;
use crate::result::Projection;

/// Projects `birth` forward from `today` using the default configuration.
///
/// # Errors
///
/// See [`project_with`].
///
/// # Example
///
/// ```
/// use cake_calendar::CalendarDate;
/// use cake_projection::project;
///
/// let birth = CalendarDate::parse("1990-03-15").unwrap();
/// let today = CalendarDate::parse("2025-03-10").unwrap();
/// let p = project(birth, today).unwrap();
/// assert_eq!(p.days_until(), 5);
/// assert_eq!(p.current_age(), 34);
/// assert_eq!(p.next_age(), 35);
/// ```
pub fn project(birth: CalendarDate, today: CalendarDate) -> Result<Projection, ProjectionError> {
    project_with(birth, today, &ProjectionConfig::default())
}

/// Projects `birth` forward from `today`.
///
/// The occurrence in `today`'s year counts as upcoming when it falls on or
/// after `today`, so the day count is 0 on the birthday itself. Otherwise the
/// next occurrence is in the following year.
///
/// # Errors
///
/// Returns [`ProjectionError::FutureBirthDate`] when `birth.year()` is after
/// `today.year()` and the configuration rejects future births, and
/// [`ProjectionError::Calendar`] when the next occurrence would fall past the
/// last representable year.
pub fn project_with(
    birth: CalendarDate,
    today: CalendarDate,
    config: &ProjectionConfig,
) -> Result<Projection, ProjectionError> {
    if birth.year() > today.year() && config.future_birth() == FutureBirthPolicy::Reject {
        return Err(ProjectionError::FutureBirthDate {
            birth_year: birth.year(),
            today_year: today.year(),
        });
    }

    let this_year = occurrence_in(birth, today.year(), config.leap_day())?;
    let (next_year, next_occurrence) = if this_year < today {
        let year = today.year() + 1;
        (year, occurrence_in(birth, year, config.leap_day())?)
    } else {
        (today.year(), this_year)
    };

    let days = day_difference(today, next_occurrence);
    debug_assert!((0..=366).contains(&days), "days until out of range: {days}");
    let days_until = days as u32;

    let not_yet = i32::from(this_year > today);
    let current_age = (today.year() - birth.year() - not_yet).max(0) as u32;
    let next_age = next_year - birth.year();

    Ok(Projection::new(
        days_until,
        current_age,
        next_age,
        next_occurrence,
    ))
}

/// The birthday of `birth` as celebrated in `year`.
///
/// # Errors
///
/// Returns [`ProjectionError::Calendar`] if `year` is not representable.
pub fn occurrence_in(
    birth: CalendarDate,
    year: i32,
    policy: LeapDayPolicy,
) -> Result<CalendarDate, ProjectionError> {
    let (month, day) = birth.month_day();
    if (month, day) == (2, 29) && !is_leap_year(year) {
        trace!(year, ?policy, "leap-day birthday in a common year");
        let date = match policy {
            LeapDayPolicy::ClampToFeb28 => CalendarDate::new(year, 2, 28)?,
            LeapDayPolicy::RollToMar1 => CalendarDate::new(year, 3, 1)?,
        };
        return Ok(date);
    }
    Ok(CalendarDate::new(year, month, day)?)
}
