//! Structured countdown for display layers.

/// How far away a birthday is, in the shape a renderer phrases it.
///
/// Counts above 30 days are split into 30-day months and leftover days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Countdown {
    /// The birthday is today.
    Today,
    /// The birthday is tomorrow.
    Tomorrow,
    /// 2 to 30 days away.
    Days(u32),
    /// More than 30 days away.
    Months {
        /// Whole 30-day months.
        months: u32,
        /// Remaining days (0..30).
        days: u32,
    },
}

impl Countdown {
    /// Builds the countdown for a day count.
    pub fn from_days(days_until: u32) -> Self {
        match days_until {
            0 => Countdown::Today,
            1 => Countdown::Tomorrow,
            2..=30 => Countdown::Days(days_until),
            _ => Countdown::Months {
                months: days_until / 30,
                days: days_until % 30,
            },
        }
    }

    /// Total days represented.
    pub fn total_days(self) -> u32 {
        match self {
            Countdown::Today => 0,
            Countdown::Tomorrow => 1,
            Countdown::Days(d) => d,
            Countdown::Months { months, days } => months * 30 + days,
        }
    }
}
