//! Error types for the cake-calendar crate.

/// Error type for all fallible operations in the cake-calendar crate.
///
/// `InvalidYear`, `InvalidMonth` and `InvalidDay` are argument errors raised
/// when constructing a date from components. `Format` is raised when text
/// cannot be read as a date, including text that names a date which does
/// not exist (such as `2023-04-31`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year is outside the four-digit range 1..=9999.
    #[error("invalid year: {year} (must be 1..=9999)")]
    InvalidYear {
        /// The invalid year that was provided.
        year: i32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year the month belongs to.
        year: i32,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when text does not match the expected date layout or
    /// names a date that does not exist.
    #[error("invalid date {input:?}: {reason}")]
    Format {
        /// The text that failed to parse.
        input: String,
        /// Why the text was rejected.
        reason: String,
    },
}

impl CalendarError {
    pub(crate) fn format(input: &str, reason: impl Into<String>) -> Self {
        Self::Format {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
