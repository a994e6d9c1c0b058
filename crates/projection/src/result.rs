//! Output type for birthday projections.

use cake_calendar::CalendarDate;

use crate::tier::{UrgencyTier, classify};

/// Forward-looking view of one birthday relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Projection {
    days_until: u32,
    current_age: u32,
    next_age: i32,
    next_occurrence: CalendarDate,
}

impl Projection {
    pub(crate) fn new(
        days_until: u32,
        current_age: u32,
        next_age: i32,
        next_occurrence: CalendarDate,
    ) -> Self {
        Self {
            days_until,
            current_age,
            next_age,
            next_occurrence,
        }
    }

    /// Days from the reference date to the next occurrence (0 on the birthday).
    pub fn days_until(&self) -> u32 {
        self.days_until
    }

    /// Completed years at the reference date.
    pub fn current_age(&self) -> u32 {
        self.current_age
    }

    /// Age reached on the next occurrence.
    pub fn next_age(&self) -> i32 {
        self.next_age
    }

    /// Date of the next occurrence.
    pub fn next_occurrence(&self) -> CalendarDate {
        self.next_occurrence
    }

    /// Urgency tier of the day count.
    pub fn urgency(&self) -> UrgencyTier {
        classify(self.days_until)
    }

    /// Returns `true` when the reference date is the birthday.
    pub fn is_today(&self) -> bool {
        self.days_until == 0
    }
}
