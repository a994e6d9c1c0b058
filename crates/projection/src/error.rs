//! Error types for the cake-projection crate.

use cake_calendar::CalendarError;

/// Error type for all fallible operations in the cake-projection crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectionError {
    /// Returned when the birth year lies after the reference year and the
    /// configuration rejects future birth dates.
    #[error("birth year {birth_year} is after reference year {today_year}")]
    FutureBirthDate {
        /// Year of the birth date.
        birth_year: i32,
        /// Year of the reference date.
        today_year: i32,
    },

    /// Wrapped error from the calendar crate.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_future_birth_date() {
        let e = ProjectionError::FutureBirthDate {
            birth_year: 2030,
            today_year: 2025,
        };
        assert_eq!(e.to_string(), "birth year 2030 is after reference year 2025");
    }

    #[test]
    fn error_calendar_is_transparent() {
        let e = ProjectionError::from(CalendarError::InvalidMonth { month: 0 });
        assert_eq!(e.to_string(), "invalid month: 0 (must be 1..=12)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ProjectionError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ProjectionError>();
    }
}
