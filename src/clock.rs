//! The reference date every projection is computed against.

use anyhow::{Context, Result};
use cake_calendar::CalendarDate;
use chrono::{Datelike, NaiveDate};

/// Resolves "today": the `--today` override if given, else the local date.
pub fn today(override_date: Option<&str>) -> Result<CalendarDate> {
    match override_date {
        Some(text) => CalendarDate::parse(text)
            .with_context(|| format!("invalid --today value: {text:?}")),
        None => from_naive(chrono::Local::now().date_naive()),
    }
}

fn from_naive(date: NaiveDate) -> Result<CalendarDate> {
    let month = u8::try_from(date.month())?;
    let day = u8::try_from(date.day())?;
    CalendarDate::new(date.year(), month, day)
        .with_context(|| format!("local date {date} is out of range"))
}
