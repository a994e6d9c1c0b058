//! Pure conversion functions: TOML config structs and CLI strings -> crate API types.

use anyhow::{Result, bail};

use cake_calendar::DateStyle;
use cake_projection::{
    FutureBirthPolicy, LeapDayPolicy, ProjectionConfig, ReminderKind, ReminderSchedule,
    UrgencyTier,
};
use cake_roster::{SortOrder, TierFilter};

use crate::config::{ProjectionToml, RemindersToml};

/// Parses a date style name into the corresponding enum variant.
pub fn parse_date_style(s: &str) -> Result<DateStyle> {
    let lower = s.to_lowercase();
    match DateStyle::ALL.into_iter().find(|d| d.as_str() == lower) {
        Some(style) => Ok(style),
        None => bail!("unknown date style: {s:?}"),
    }
}

/// Parses a tier name; `all` keeps every tier.
pub fn parse_tier(s: &str) -> Result<TierFilter> {
    let lower = s.to_lowercase();
    if lower == "all" {
        return Ok(TierFilter::All);
    }
    match UrgencyTier::ALL.into_iter().find(|t| t.as_str() == lower) {
        Some(tier) => Ok(TierFilter::Only(tier)),
        None => bail!("unknown tier: {s:?}"),
    }
}

/// Parses a sort order name into the corresponding enum variant.
pub fn parse_sort_order(s: &str) -> Result<SortOrder> {
    match s.to_lowercase().as_str() {
        "proximity" => Ok(SortOrder::Proximity),
        "name" => Ok(SortOrder::Name),
        "name-desc" => Ok(SortOrder::NameDesc),
        other => bail!("unknown sort order: {other:?}"),
    }
}

/// Parses a Feb 29 policy name into the corresponding enum variant.
pub fn parse_leap_day(s: &str) -> Result<LeapDayPolicy> {
    match s.to_lowercase().as_str() {
        "clamp" | "feb28" => Ok(LeapDayPolicy::ClampToFeb28),
        "roll" | "mar1" => Ok(LeapDayPolicy::RollToMar1),
        other => bail!("unknown leap day policy: {other:?}"),
    }
}

/// Parses a future birth date policy name into the corresponding enum variant.
pub fn parse_future_birth(s: &str) -> Result<FutureBirthPolicy> {
    match s.to_lowercase().as_str() {
        "reject" => Ok(FutureBirthPolicy::Reject),
        "accept" => Ok(FutureBirthPolicy::Accept),
        other => bail!("unknown future birth policy: {other:?}"),
    }
}

/// Builds a [`ProjectionConfig`] from the TOML projection configuration.
pub fn build_projection_config(p: &ProjectionToml) -> Result<ProjectionConfig> {
    Ok(ProjectionConfig::new()
        .with_leap_day(parse_leap_day(&p.leap_day)?)
        .with_future_birth(parse_future_birth(&p.future_birth)?))
}

/// Builds a [`ReminderSchedule`] from the TOML reminder flags.
pub fn build_reminder_schedule(r: &RemindersToml) -> ReminderSchedule {
    ReminderSchedule::none()
        .with(ReminderKind::OnDay, r.on_day)
        .with(ReminderKind::DayBefore, r.day_before)
        .with(ReminderKind::ThreeDaysBefore, r.three_days_before)
        .with(ReminderKind::OneWeekBefore, r.one_week_before)
        .with(ReminderKind::TwoWeeksBefore, r.two_weeks_before)
        .with(ReminderKind::OneMonthBefore, r.one_month_before)
}
