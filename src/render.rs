//! Text and JSON shapes shared by the commands.

use cake_calendar::DateStyle;
use cake_projection::{Countdown, Priority, ReminderKind};
use cake_roster::Entry;
use serde::Serialize;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English name of `month` (1..=12).
pub fn month_name(month: u8) -> &'static str {
    MONTH_NAMES
        .get(usize::from(month).wrapping_sub(1))
        .copied()
        .unwrap_or("?")
}

/// Phrases a day count: "today", "tomorrow", "in 5 days", "in 2 months, 3 days".
pub fn countdown_text(days_until: u32) -> String {
    match Countdown::from_days(days_until) {
        Countdown::Today => "today".to_string(),
        Countdown::Tomorrow => "tomorrow".to_string(),
        Countdown::Days(n) => format!("in {n} days"),
        Countdown::Months { months, days } => {
            let m = plural(months, "month");
            if days == 0 {
                format!("in {m}")
            } else {
                format!("in {m}, {}", plural(days, "day"))
            }
        }
    }
}

fn plural(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Short label for a reminder offset.
pub fn reminder_label(kind: ReminderKind) -> &'static str {
    match kind {
        ReminderKind::OnDay => "today",
        ReminderKind::DayBefore => "tomorrow",
        ReminderKind::ThreeDaysBefore => "in 3 days",
        ReminderKind::OneWeekBefore => "in 1 week",
        ReminderKind::TwoWeeksBefore => "in 2 weeks",
        ReminderKind::OneMonthBefore => "in 1 month",
    }
}

/// Tag printed in front of a reminder line.
pub fn priority_tag(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "[!]",
        Priority::Normal => "[ ]",
    }
}

/// One listing row as emitted with `--json`.
#[derive(Debug, Serialize)]
pub struct Row<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub days_until: u32,
    pub current_age: u32,
    pub next_age: i32,
    pub next_occurrence: String,
    pub urgency: &'static str,
}

impl<'a> Row<'a> {
    pub fn from_entry(entry: &Entry<'a>, style: DateStyle) -> Self {
        let p = entry.projection();
        Self {
            id: entry.id(),
            name: entry.name(),
            days_until: p.days_until(),
            current_age: p.current_age(),
            next_age: p.next_age(),
            next_occurrence: p.next_occurrence().format(style),
            urgency: p.urgency().as_str(),
        }
    }
}

/// Renders entries as an aligned text table.
pub fn table(entries: &[Entry<'_>], style: DateStyle) -> String {
    let name_w = entries
        .iter()
        .map(|e| e.name().chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());
    let date_w = entries
        .first()
        .map(|e| e.next_occurrence_text(style).len())
        .unwrap_or(0)
        .max("NEXT".len());

    let mut out = format!(
        "{:<name_w$}  {:<date_w$}  {:>5}  {:<8}  WHEN\n",
        "NAME", "NEXT", "TURNS", "TIER"
    );
    for e in entries {
        let p = e.projection();
        out.push_str(&format!(
            "{:<name_w$}  {:<date_w$}  {:>5}  {:<8}  {}\n",
            e.name(),
            e.next_occurrence_text(style),
            p.next_age(),
            p.urgency().as_str(),
            countdown_text(p.days_until()),
        ));
    }
    out
}
