//! Urgency tiers derived from the day count.

use std::fmt;

/// Coarse bucket describing how soon a birthday occurs.
///
/// | Tier | Days until |
/// |------|-----------|
/// | `Urgent` | 0..=7 |
/// | `Soon` | 8..=30 |
/// | `Upcoming` | 31..=90 |
/// | `Distant` | 91.. |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UrgencyTier {
    /// Within a week.
    Urgent,
    /// Within a month.
    Soon,
    /// Within three months.
    Upcoming,
    /// More than three months away.
    Distant,
}

impl UrgencyTier {
    /// Every tier, nearest first.
    pub const ALL: [UrgencyTier; 4] = [
        UrgencyTier::Urgent,
        UrgencyTier::Soon,
        UrgencyTier::Upcoming,
        UrgencyTier::Distant,
    ];

    /// Returns the inclusive day range of the tier; `None` as the upper
    /// bound means unbounded.
    pub fn range(self) -> (u32, Option<u32>) {
        match self {
            UrgencyTier::Urgent => (0, Some(7)),
            UrgencyTier::Soon => (8, Some(30)),
            UrgencyTier::Upcoming => (31, Some(90)),
            UrgencyTier::Distant => (91, None),
        }
    }

    /// Returns `true` if `days_until` falls in this tier.
    pub fn contains(self, days_until: u32) -> bool {
        classify(days_until) == self
    }

    /// Returns the lowercase name of the tier.
    pub fn as_str(self) -> &'static str {
        match self {
            UrgencyTier::Urgent => "urgent",
            UrgencyTier::Soon => "soon",
            UrgencyTier::Upcoming => "upcoming",
            UrgencyTier::Distant => "distant",
        }
    }
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a day count to its [`UrgencyTier`].
pub fn classify(days_until: u32) -> UrgencyTier {
    match days_until {
        0..=7 => UrgencyTier::Urgent,
        8..=30 => UrgencyTier::Soon,
        31..=90 => UrgencyTier::Upcoming,
        _ => UrgencyTier::Distant,
    }
}
