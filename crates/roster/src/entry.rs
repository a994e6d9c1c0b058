//! A record paired with its projection.

use cake_calendar::{CalendarDate, DateStyle};
use cake_projection::{Projection, UrgencyTier};

use crate::record::BirthRecord;

/// A borrowed record with its parsed birth date and projection against the
/// roster's reference date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry<'a> {
    record: &'a BirthRecord,
    birth_date: CalendarDate,
    projection: Projection,
}

impl<'a> Entry<'a> {
    pub(crate) fn new(
        record: &'a BirthRecord,
        birth_date: CalendarDate,
        projection: Projection,
    ) -> Self {
        Self {
            record,
            birth_date,
            projection,
        }
    }

    /// The underlying record.
    pub fn record(&self) -> &'a BirthRecord {
        self.record
    }

    /// Record id.
    pub fn id(&self) -> &'a str {
        self.record.id()
    }

    /// Record name.
    pub fn name(&self) -> &'a str {
        self.record.name()
    }

    /// Parsed birth date.
    pub fn birth_date(&self) -> CalendarDate {
        self.birth_date
    }

    /// Projection against the reference date.
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Shorthand for `projection().days_until()`.
    pub fn days_until(&self) -> u32 {
        self.projection.days_until()
    }

    /// Shorthand for `projection().urgency()`.
    pub fn urgency(&self) -> UrgencyTier {
        self.projection.urgency()
    }

    /// Next occurrence formatted in `style`.
    pub fn next_occurrence_text(&self, style: DateStyle) -> String {
        self.projection.next_occurrence().format(style)
    }
}
