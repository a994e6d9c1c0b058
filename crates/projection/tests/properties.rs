//! Whole-year sweeps over reference dates.

use cake_calendar::{CalendarDate, day_difference, days_in_month};
use cake_projection::{LeapDayPolicy, ProjectionConfig, classify, project, project_with};

fn all_dates(year: i32) -> Vec<CalendarDate> {
    let mut dates = Vec::with_capacity(366);
    for month in 1..=12u8 {
        for day in 1..=days_in_month(year, month).unwrap() {
            dates.push(CalendarDate::new(year, month, day).unwrap());
        }
    }
    dates
}

#[test]
fn days_until_never_negative_and_within_a_year() {
    let births = [
        CalendarDate::new(1990, 1, 1).unwrap(),
        CalendarDate::new(1985, 7, 31).unwrap(),
        CalendarDate::new(1960, 12, 31).unwrap(),
        CalendarDate::new(2000, 2, 29).unwrap(),
    ];
    for today in all_dates(2023).into_iter().chain(all_dates(2024)) {
        for birth in births {
            let p = project(birth, today).unwrap();
            assert!(p.days_until() <= 366, "{birth} from {today}");
            assert_eq!(
                i64::from(p.days_until()),
                day_difference(today, p.next_occurrence())
            );
            assert!(p.next_occurrence() >= today);
            assert_eq!(p.urgency(), classify(p.days_until()));
        }
    }
}

#[test]
fn birthday_today_for_any_birth_year() {
    for today in all_dates(2024) {
        for birth_year in [1901, 1950, 2000, 2024] {
            let Ok(birth) = CalendarDate::new(birth_year, today.month(), today.day()) else {
                // Feb 29 does not exist in every birth year.
                continue;
            };
            let p = project(birth, today).unwrap();
            assert_eq!(p.days_until(), 0, "{birth} on {today}");
            assert_eq!(p.current_age() as i32, p.next_age());
        }
    }
}

#[test]
fn next_age_is_current_age_plus_one_except_on_birthday() {
    let birth = CalendarDate::new(1970, 6, 15).unwrap();
    for today in all_dates(2025) {
        let p = project(birth, today).unwrap();
        if p.days_until() == 0 {
            assert_eq!(p.next_age(), p.current_age() as i32);
        } else {
            assert_eq!(p.next_age(), p.current_age() as i32 + 1, "on {today}");
        }
    }
}

#[test]
fn leap_day_policies_agree_when_target_year_is_leap() {
    let birth = CalendarDate::new(2004, 2, 29).unwrap();
    let clamp = ProjectionConfig::new();
    let roll = ProjectionConfig::new().with_leap_day(LeapDayPolicy::RollToMar1);
    let leap_day = CalendarDate::new(2024, 2, 29).unwrap();
    for today in all_dates(2024).into_iter().filter(|d| *d <= leap_day) {
        assert_eq!(
            project_with(birth, today, &clamp).unwrap(),
            project_with(birth, today, &roll).unwrap(),
            "leap-year reference {today}"
        );
    }
    let jan = CalendarDate::new(2023, 1, 10).unwrap();
    let a = project_with(birth, jan, &clamp).unwrap();
    let b = project_with(birth, jan, &roll).unwrap();
    assert_eq!(b.days_until(), a.days_until() + 1);
}
